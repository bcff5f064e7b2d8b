//! Host-side account fixtures for exercising the account loading layer.

use anchor_lang::prelude::*;

/// Backing storage for an `AccountInfo` built on the host.
pub(crate) struct StoredAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    lamports: u64,
    data: Vec<u8>,
}

impl StoredAccount {
    /// A PDA nobody has initialized yet: no data, owned by the system program
    pub fn empty() -> Self {
        Self {
            key: Pubkey::new_unique(),
            owner: Pubkey::default(),
            lamports: 0,
            data: Vec::new(),
        }
    }

    /// A program-owned account holding `value` with its discriminator
    pub fn holding<T: AccountSerialize>(value: &T) -> Self {
        let mut data = Vec::new();
        value
            .try_serialize(&mut data)
            .expect("account record serializes");

        Self {
            key: Pubkey::new_unique(),
            owner: crate::ID,
            lamports: 1_000_000,
            data,
        }
    }

    pub fn at(mut self, key: Pubkey) -> Self {
        self.key = key;
        self
    }

    pub fn owned_by(mut self, owner: Pubkey) -> Self {
        self.owner = owner;
        self
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            false,
            true,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            false,
            0,
        )
    }
}

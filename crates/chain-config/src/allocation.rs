use crate::{
    ports::read_address_list,
    Address,
    GenesisAccount,
    GenesisAlloc,
    Prompt,
    Result,
};
use primitive_types::U256;

/// Number of low addresses reserved for precompiled contracts.
pub const PRECOMPILE_COUNT: u64 = 256;

/// Balance given to every operator funded account: 2^256 / 128, which leaves
/// room to fund many accounts without the total overflowing a word.
pub fn prefund_balance() -> U256 {
    U256::one() << 249
}

/// Collects the initial balances of a genesis.
///
/// Funding the same address twice keeps the balance of the later call.
#[derive(Clone, Debug, Default)]
pub struct AllocationBuilder {
    alloc: GenesisAlloc,
}

impl AllocationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fund(&mut self, address: Address, balance: U256) -> &mut Self {
        self.alloc
            .insert(address, GenesisAccount::with_balance(balance));
        self
    }

    /// A self-voting signer needs the minimum voter balance for its own vote
    /// to count.
    pub fn fund_self_voter(&mut self, signer: Address, min_voter_balance: U256) -> &mut Self {
        self.fund(signer, min_voter_balance)
    }

    pub fn prefund(&mut self, address: Address) -> &mut Self {
        self.fund(address, prefund_balance())
    }

    /// Gives each precompile address a balance of one so clients that prune
    /// empty accounts keep them.
    pub fn fund_precompiles(&mut self) -> &mut Self {
        for index in 0..PRECOMPILE_COUNT {
            self.fund(Address::from_low_u64_be(index), U256::one());
        }
        self
    }

    /// Asks for any number of accounts to pre-fund.
    pub fn prompt_prefunded<P: Prompt + ?Sized>(&mut self, prompt: &mut P) -> Result<()> {
        read_address_list(
            prompt,
            "Which accounts should be pre-funded? (advisable at least one)",
            0,
            |address| {
                self.prefund(*address);
            },
        )?;
        Ok(())
    }

    pub fn prompt_precompiles<P: Prompt + ?Sized>(&mut self, prompt: &mut P) -> Result<()> {
        let fund = prompt.read_default_yes_no(
            "Should the precompile-addresses (0x1 .. 0xff) be pre-funded with 1 wei? (advisable yes)",
            true,
        )?;
        if fund {
            self.fund_precompiles();
        }
        Ok(())
    }

    pub fn build(self) -> GenesisAlloc {
        self.alloc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::scripted;

    #[test]
    fn prefund_balance_is_a_128th_of_the_word_range() {
        let balance = prefund_balance();

        assert_eq!(balance.bits(), 250);
        assert_eq!(balance * U256::from(64u64), U256::one() << 255);
    }

    #[test]
    fn precompiles_cover_the_first_256_addresses() {
        // given
        let mut builder = AllocationBuilder::new();

        // when
        builder.fund_precompiles();

        // then
        let alloc = builder.build();
        assert_eq!(alloc.len(), 256);
        assert_eq!(alloc.keys().next(), Some(&Address::zero()));
        assert_eq!(alloc.keys().last(), Some(&Address::from_low_u64_be(0xff)));
        assert!(alloc.values().all(|account| account.balance == U256::one()));
    }

    #[test]
    fn precompiles_leave_other_funded_accounts_alone() {
        // given
        let rich = Address::repeat_byte(0xaa);
        let overlapping = Address::from_low_u64_be(0x09);
        let mut builder = AllocationBuilder::new();
        builder.prefund(rich).prefund(overlapping);

        // when
        builder.fund_precompiles();

        // then
        let alloc = builder.build();
        assert_eq!(alloc.len(), 257);
        assert_eq!(alloc[&rich].balance, prefund_balance());
        assert_eq!(alloc[&overlapping].balance, U256::one());
    }

    #[test]
    fn later_funding_replaces_earlier_funding() {
        let voter = Address::repeat_byte(0xbb);
        let mut builder = AllocationBuilder::new();

        builder
            .fund_self_voter(voter, U256::from(1000u64))
            .prefund(voter);

        assert_eq!(builder.build()[&voter].balance, prefund_balance());
    }

    #[test]
    fn prompted_accounts_are_prefunded_until_an_empty_answer() {
        // given
        let mut prompt = scripted(&[
            "0x1111111111111111111111111111111111111111",
            "2222222222222222222222222222222222222222",
            "",
        ]);
        let mut builder = AllocationBuilder::new();

        // when
        builder.prompt_prefunded(&mut prompt).unwrap();

        // then
        let alloc = builder.build();
        assert_eq!(alloc.len(), 2);
        assert!(alloc.values().all(|account| account.balance == prefund_balance()));
    }

    #[test]
    fn no_prefunded_accounts_is_allowed() {
        let mut prompt = scripted(&[""]);
        let mut builder = AllocationBuilder::new();

        builder.prompt_prefunded(&mut prompt).unwrap();

        assert!(builder.build().is_empty());
    }

    #[test]
    fn declining_precompiles_funds_nothing() {
        let mut prompt = scripted(&["n"]);
        let mut builder = AllocationBuilder::new();

        builder.prompt_precompiles(&mut prompt).unwrap();

        assert!(builder.build().is_empty());
    }
}

use crate::{
    Address,
    Result,
};
use primitive_types::U256;

/// Operator input consumed while building or editing a genesis.
///
/// Every method shows `question` to the operator before waiting for an
/// answer. Methods taking a default return it when the answer is empty.
pub trait Prompt {
    fn read_line(&mut self, question: &str) -> Result<String>;

    fn read_default_string(&mut self, question: &str, default: &str) -> Result<String>;

    fn read_default_int(&mut self, question: &str, default: u64) -> Result<u64>;

    fn read_default_big_int(
        &mut self,
        question: &str,
        default: Option<U256>,
    ) -> Result<Option<U256>>;

    fn read_default_yes_no(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Reads an address, or `None` once the operator enters an empty line.
    fn read_address(&mut self, question: &str) -> Result<Option<Address>>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn read_line(&mut self, question: &str) -> Result<String> {
        (**self).read_line(question)
    }

    fn read_default_string(&mut self, question: &str, default: &str) -> Result<String> {
        (**self).read_default_string(question, default)
    }

    fn read_default_int(&mut self, question: &str, default: u64) -> Result<u64> {
        (**self).read_default_int(question, default)
    }

    fn read_default_big_int(
        &mut self,
        question: &str,
        default: Option<U256>,
    ) -> Result<Option<U256>> {
        (**self).read_default_big_int(question, default)
    }

    fn read_default_yes_no(&mut self, question: &str, default: bool) -> Result<bool> {
        (**self).read_default_yes_no(question, default)
    }

    fn read_address(&mut self, question: &str) -> Result<Option<Address>> {
        (**self).read_address(question)
    }
}

/// Keeps asking for addresses until the operator finishes the list, refusing
/// to finish while fewer than `min` have been entered.
///
/// `on_accept` runs for every address as soon as it is entered.
pub fn read_address_list<P, F>(
    prompt: &mut P,
    question: &str,
    min: usize,
    mut on_accept: F,
) -> Result<Vec<Address>>
where
    P: Prompt + ?Sized,
    F: FnMut(&Address),
{
    let mut addresses = Vec::new();
    loop {
        match prompt.read_address(question)? {
            Some(address) => {
                on_accept(&address);
                addresses.push(address);
            }
            None if addresses.len() >= min => break,
            None => {
                tracing::warn!(
                    "At least {min} address(es) required, {} entered",
                    addresses.len()
                );
            }
        }
    }
    Ok(addresses)
}

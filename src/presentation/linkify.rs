use crate::types::Chain;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref ADDRESS_RE: Regex = Regex::new(r"0x[0-9a-fA-F]{40}").unwrap();
}

/// `0x` + first 8 hex digits + `...` + last 8 hex digits
///
/// Slices on character boundaries. Input too short to shorten is returned as
/// given.
pub fn shorten_address(address: &str) -> String {
    let hex = address.strip_prefix("0x").unwrap_or(address);
    let chars: Vec<char> = hex.chars().collect();
    if chars.len() <= 16 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("0x{}...{}", head, tail)
}

/// Rewrite every embedded address in `text` as a link to `address_base_url`
pub fn linkify_with_base(text: &str, address_base_url: &str) -> String {
    ADDRESS_RE
        .replace_all(text, |caps: &Captures| {
            let address = &caps[0];
            format!(
                "<a href=\"{}/{}\" target=\"_blank\">{}</a>",
                address_base_url,
                address,
                shorten_address(address)
            )
        })
        .into_owned()
}

/// Rewrite every embedded address in `text` as a link to the chain's explorer
pub fn linkify(text: &str, chain: Chain) -> String {
    linkify_with_base(text, &chain.address_base_url())
}

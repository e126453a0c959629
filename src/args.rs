//! Command line argument parsing and validation.

use crate::{Error, Result};

/// Default ring order when no arguments are given.
pub const DEFAULT_ORDER: u32 = 1024;

/// Help text printed alongside argument errors.
pub const HELP_TEXT: &str = "\
Rings
Render residue class rings of the form \x1b[1mZ/pZ\x1b[0m.
The colors indicate the values in the ring, up to a precision of \x1b[3m1/256\x1b[0m.

Usage:
  rings [p] [s]
   p    Order of the ring, type \x1b[3muint32\x1b[0m.
        Default value is \x1b[3m1024\x1b[0m.
   s    Size of the output image, type \x1b[3muint32\x1b[0m.
        Must be smaller or equal to \x1b[3mp\x1b[0m.
        Default value is set to \x1b[3mp\x1b[0m.

Example:
  rings \x1b[3m2048\x1b[0m \x1b[3m1024\x1b[0m
  Would render ring \x1b[1mZ/2048Z\x1b[0m and downscale it to \x1b[3m1024x1024\x1b[0m.";

/// Validated command line arguments.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Args {
    /// Order of the ring and side length of the unscaled image.
    pub order: u32,
    /// Side length of the output image.
    pub size: u32,
}

impl Args {
    /// Validates raw argument tokens.
    ///
    /// With no tokens the order defaults to 1024, and with one token the
    /// size defaults to the order. Both values must be positive and the
    /// size must not exceed the order.
    pub fn from_tokens(tokens: &[&str]) -> Result<Args> {
        let order = match tokens.first() {
            Some(token) => parse_uint(token)?,
            None => DEFAULT_ORDER,
        };
        let size = match tokens.get(1) {
            Some(token) => parse_uint(token)?,
            None => order,
        };
        if order == 0 {
            return Err(Error::ZeroOrder);
        }
        if size == 0 {
            return Err(Error::ZeroSize);
        }
        if size > order {
            return Err(Error::SizeExceedsOrder { order, size });
        }
        Ok(Args { order, size })
    }
}

fn parse_uint(token: &str) -> Result<u32> {
    token.parse().map_err(|_| Error::Parse {
        token: token.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::from_tokens(&[]).unwrap();
        assert_eq!(args, Args { order: 1024, size: 1024 });

        let args = Args::from_tokens(&["2048"]).unwrap();
        assert_eq!(args, Args { order: 2048, size: 2048 });
    }

    #[test]
    fn explicit_size() {
        let args = Args::from_tokens(&["2048", "1024"]).unwrap();
        assert_eq!(args, Args { order: 2048, size: 1024 });
    }

    #[test]
    fn size_exceeding_order_is_rejected() {
        assert!(matches!(
            Args::from_tokens(&["1024", "2048"]),
            Err(Error::SizeExceedsOrder { order: 1024, size: 2048 })
        ));
    }

    #[test]
    fn unparseable_tokens_are_rejected() {
        assert!(matches!(
            Args::from_tokens(&["abc"]),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            Args::from_tokens(&["-1"]),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            Args::from_tokens(&["16", "4294967296"]),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(Args::from_tokens(&["0"]), Err(Error::ZeroOrder)));
        assert!(matches!(
            Args::from_tokens(&["16", "0"]),
            Err(Error::ZeroSize)
        ));
    }
}

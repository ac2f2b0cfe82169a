use super::DescribeError;
use crate::model::{CommitId, FULL_HEX_LEN};
use crate::repository::VcsBinding;

/// Validate a configured abbreviation length
pub fn validate_abbrev_length(length: i32) -> Result<usize, DescribeError> {
    usize::try_from(length)
        .ok()
        .filter(|&n| n <= FULL_HEX_LEN)
        .ok_or(DescribeError::AbbrevOutOfRange(length))
}

/// Renders abbreviated commit ids
///
/// `length` is a minimum: the prefix grows one character at a time while the
/// binding reports it as ambiguous. A length of 0 disables abbreviation.
pub struct AbbreviationResolver<'a, B: ?Sized> {
    binding: &'a B,
}

impl<'a, B: VcsBinding + ?Sized> AbbreviationResolver<'a, B> {
    pub fn new(binding: &'a B) -> Self {
        Self { binding }
    }

    pub fn abbreviate(&self, id: &CommitId, length: usize) -> Result<String, DescribeError> {
        let mut hex = id.to_hex();
        if length == 0 {
            return Ok(hex);
        }

        let mut len = length.min(FULL_HEX_LEN);
        while len < FULL_HEX_LEN
            && self
                .binding
                .prefix_is_ambiguous(id, len)
                .map_err(DescribeError::GraphRead)?
        {
            len += 1;
        }

        hex.truncate(len);
        Ok(hex)
    }
}

/// Default limit on composite nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for a [`FieldDecoder`](crate::FieldDecoder).
///
/// ```text
/// ┌────────────┬─────────┬───────────────────────────────────────────┐
/// │ Field      │ Default │ Purpose                                   │
/// ├────────────┼─────────┼───────────────────────────────────────────┤
/// │ max_depth  │ 64      │ Deepest composite nesting level accepted  │
/// └────────────┴─────────┴───────────────────────────────────────────┘
/// ```
///
/// Nesting levels count composites: a top-level table is level 1, an
/// array inside it level 2, and so on. Scalars never count. A buffer whose
/// composites go deeper than `max_depth` is rejected with
/// [`DecodeError::DepthExceeded`](crate::DecodeError::DepthExceeded)
/// before the decoder recurses any further, which keeps stack use bounded
/// for hostile input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Deepest composite nesting level accepted.
    pub max_depth: usize,
}

impl DecoderConfig {
    /// Set [`max_depth`](Self::max_depth).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

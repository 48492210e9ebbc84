//! DoS prevention constants.
//!
//! These limits keep pathological inputs from exhausting the stack or
//! blowing up memory.

/// Maximum nesting depth for inline entities (`B<I<C<...>>>`).
///
/// The entity scanner recurses once per nesting level.
pub const MAX_ENTITY_NESTING: usize = 256;

/// Initial capacity of the begin/end stack before it spills to the heap.
pub const INLINE_BEGIN_STACK: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_are_reasonable() {
        const { assert!(MAX_ENTITY_NESTING >= 32) };
        const { assert!(MAX_ENTITY_NESTING <= 1024) };
    }
}

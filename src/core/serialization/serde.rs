/*!
 * Serde Helper Functions
 * Predicates for `skip_serializing_if` on snapshot types
 */

#[inline]
pub const fn is_zero_u64(value: &u64) -> bool {
    *value == 0
}

#[inline]
pub const fn is_zero_usize(value: &usize) -> bool {
    *value == 0
}

#[inline]
pub const fn is_false(value: &bool) -> bool {
    !*value
}

/// The result of cutting a block by a joint plane.
pub enum SplitResult<T> {
    /// The cut yields two results: the first lying on the negative (kept)
    /// half-space of the plane and the second lying on the positive
    /// (excluded) half-space.
    Pair(T, T),
    /// The shape being cut is fully contained in the negative half-space of
    /// the plane and is left unchanged.
    Negative,
    /// The shape being cut is fully contained in the positive half-space of
    /// the plane and is left unchanged.
    Positive,
    /// The joint's bounded extent does not reach the shape, so the cut leaves
    /// it unchanged regardless of which side of the plane it lies on.
    Untouched,
}

pub const TRIALS: usize = 5;
pub const PREVIEW_LIMIT: usize = 20;

const _: () = {
    assert!(TRIALS >= 1, "TRIALS must be at least one");
    assert!(PREVIEW_LIMIT > 0, "PREVIEW_LIMIT must be positive");
};

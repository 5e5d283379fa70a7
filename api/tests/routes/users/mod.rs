pub mod patch_test;
pub mod post_test;

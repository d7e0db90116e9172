pub(crate) mod common;
pub(crate) mod ping_pong_merge_sort;
pub(crate) mod presorted_prefix;

pub(crate) mod export;
pub(crate) mod inspect;
pub(crate) mod serve;

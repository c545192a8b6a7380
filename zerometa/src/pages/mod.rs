pub(crate) mod home;
pub(crate) mod support;

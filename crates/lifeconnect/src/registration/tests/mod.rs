mod common;
mod validation;

pub(crate) use common::{valid_form, valid_registration, RecordingApi};

use std::fmt::Debug;

pub mod env_args;

/// Log `message` along with the error, then swap the error for `value_to_return`.
/// Meant to be used with `map_err`.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}

//! Macros for declaring state and event-name constants.

/// Declare [`State`](crate::State) constants.
///
/// # Example
///
/// ```
/// use fsm_engine::states;
///
/// states! {
///     pub const CREATED = "created";
///     pub const PAID = "paid";
///     const COMPLETED = "completed";
/// }
///
/// assert_eq!(PAID.as_str(), "paid");
/// ```
#[macro_export]
macro_rules! states {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis const $name:ident = $value:literal;
        )*
    ) => {
        $(
            $(#[$meta])*
            $vis const $name: $crate::State = $crate::State::from_static($value);
        )*
    };
}

/// Declare [`EventName`](crate::EventName) constants.
///
/// # Example
///
/// ```
/// use fsm_engine::event_names;
///
/// event_names! {
///     pub const PAY = "Pay";
///     pub const CANCEL = "Cancel";
/// }
///
/// assert_eq!(CANCEL.as_str(), "Cancel");
/// ```
#[macro_export]
macro_rules! event_names {
    (
        $(
            $(#[$meta:meta])*
            $vis:vis const $name:ident = $value:literal;
        )*
    ) => {
        $(
            $(#[$meta])*
            $vis const $name: $crate::EventName = $crate::EventName::from_static($value);
        )*
    };
}

#[cfg(test)]
mod tests {
    use crate::{EventName, State};

    states! {
        const ON = "on";
        /// Documented states keep their attributes.
        const OFF = "off";
    }

    event_names! {
        const TURN_ON = "TurnOn";
    }

    #[test]
    fn states_macro_declares_constants() {
        assert_eq!(ON, State::from("on"));
        assert_eq!(OFF.as_str(), "off");
    }

    #[test]
    fn event_names_macro_declares_constants() {
        assert_eq!(TURN_ON, EventName::from("TurnOn"));
    }

    #[test]
    fn macros_support_visibility() {
        states! {
            pub const PUBLIC = "public";
        }

        assert!(!PUBLIC.is_unknown());
    }
}

//! Macros for declaring state and event enums.

/// Generate a [`State`](crate::core::State) implementation for a plain enum.
///
/// The enum gets `Clone`, `PartialEq`, `Eq`, `Hash`, `Debug` and serde
/// derives. Variants listed under `final:` report `is_final() == true`.
///
/// # Example
///
/// ```
/// use turnstile::core::State;
/// use turnstile::state_enum;
///
/// state_enum! {
///     pub enum Door {
///         Closed,
///         Opening,
///         Open,
///         Closing,
///         Broken,
///     }
///     final: [Broken]
/// }
///
/// assert_eq!(Door::Opening.name(), "Opening");
/// assert!(Door::Broken.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Generate an [`Event`](crate::core::Event) implementation for a plain enum.
///
/// # Example
///
/// ```
/// use turnstile::core::Event;
/// use turnstile::event_enum;
///
/// event_enum! {
///     pub enum Remote {
///         Press,
///         Release,
///     }
/// }
///
/// assert_eq!(Remote::Press.name(), "Press");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            Idle,
            Running,
            Done,
        }
        final: [Done]
    }

    event_enum! {
        enum TestEvent {
            Start,
            Finish,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert!(!TestState::Idle.is_final());
        assert!(!TestState::Running.is_final());
        assert!(TestState::Done.is_final());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        assert!(PublicState::B.is_final());
        assert!(!PublicState::A.is_final());
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(!MinimalState::One.is_final());
        assert_eq!(MinimalState::Two.name(), "Two");
    }

    #[test]
    fn state_enum_all_final_compiles() {
        state_enum! {
            enum Terminal {
                End,
            }
            final: [End]
        }

        assert!(Terminal::End.is_final());
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Finish.name(), "Finish");
        assert_ne!(TestEvent::Start, TestEvent::Finish);
    }

    #[test]
    fn generated_states_serialize_by_variant_name() {
        let json = serde_json::to_string(&TestState::Running).unwrap();
        assert_eq!(json, "\"Running\"");

        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestState::Running);
    }
}

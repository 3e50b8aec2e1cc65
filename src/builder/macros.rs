//! Macros for ergonomic state and event definitions.

/// Generate a unit enum implementing [`State`](crate::core::State).
///
/// # Example
///
/// ```
/// use modeswitch::state_enum;
/// use modeswitch::core::State;
///
/// state_enum! {
///     pub enum GameMode {
///         Menu,
///         Playing,
///         Won,
///         Lost,
///     }
/// }
///
/// assert_eq!(GameMode::Playing.name(), "Playing");
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
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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
        }
    };
}

/// Generate a unit enum implementing [`Event`](crate::core::Event).
///
/// `startup: Variant` names the event used for the implicit startup
/// transition.
///
/// # Example
///
/// ```
/// use modeswitch::event_enum;
/// use modeswitch::core::Event;
///
/// event_enum! {
///     pub enum GameEvent {
///         Startup,
///         Play,
///         Quit,
///     }
///     startup: Startup
/// }
///
/// assert_eq!(GameEvent::Quit.name(), "Quit");
/// assert_eq!(GameEvent::startup(), Some(GameEvent::Startup));
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

        $(startup: $startup:ident)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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

            $(
                fn startup() -> Option<Self> {
                    Some(Self::$startup)
                }
            )?
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            Menu,
            Playing,
        }
    }

    event_enum! {
        enum TestEvent {
            Boot,
            Play,
        }
        startup: Boot
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Menu.name(), "Menu");
        assert_eq!(TestState::Playing.name(), "Playing");
    }

    #[test]
    fn event_enum_macro_generates_trait_with_startup() {
        assert_eq!(TestEvent::Play.name(), "Play");
        assert_eq!(TestEvent::startup(), Some(TestEvent::Boot));
    }

    #[test]
    fn event_enum_works_without_startup() {
        event_enum! {
            enum MinimalEvent {
                Go,
            }
        }

        assert_eq!(MinimalEvent::Go.name(), "Go");
        assert!(MinimalEvent::startup().is_none());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let _state = PublicState::A;
        let _other = PublicState::B;
    }

    #[test]
    fn generated_enums_serialize() {
        let json = serde_json::to_string(&TestState::Playing).unwrap();
        assert_eq!(json, "\"Playing\"");
        let event: TestEvent = serde_json::from_str("\"Play\"").unwrap();
        assert_eq!(event, TestEvent::Play);
    }
}

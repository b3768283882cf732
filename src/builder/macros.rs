//! Macros for ergonomic chart construction.

/// Generate a state enum and its `State` implementation.
///
/// Variants may carry a display label used by `State::name`; unlabelled
/// variants use their identifier. The enum also gets an `ALL` constant
/// listing every variant in declaration order.
///
/// # Example
///
/// ```
/// use vendchart::core::State;
/// use vendchart::state_enum;
///
/// state_enum! {
///     pub enum Valve {
///         Shut => "SHUT",
///         Flowing => "FLOWING",
///         Sealed,
///     }
///     final: [Sealed]
/// }
///
/// assert_eq!(Valve::Shut.name(), "SHUT");
/// assert_eq!(Valve::Sealed.name(), "Sealed");
/// assert!(Valve::Sealed.is_final());
/// assert_eq!(Valve::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (@label $variant:ident, $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@label $variant $(, $label)?)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Idle => "IDLE",
            Running => "RUNNING",
            Halted => "HALTED",
        }
        final: [Halted]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Idle.name(), "IDLE");
        assert!(!TestState::Idle.is_final());
        assert!(!TestState::Running.is_final());
        assert!(TestState::Halted.is_final());
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            TestState::ALL,
            &[TestState::Idle, TestState::Running, TestState::Halted]
        );
    }

    #[test]
    fn state_enum_works_without_labels_or_final() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert_eq!(MinimalState::One.name(), "One");
        assert!(!MinimalState::Two.is_final());
    }

    #[test]
    fn state_enum_honours_serde_attributes() {
        state_enum! {
            #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
            pub enum Wire {
                NoSignal => "NO_SIGNAL",
            }
        }

        let json = serde_json::to_string(&Wire::NoSignal).unwrap();
        assert_eq!(json, "\"NO_SIGNAL\"");
    }
}

macro_rules! nutype_string {
    ($ident:ident ( $($args:tt)* )) => {
        #[::nutype::nutype(
            $($args)*,
            derive(Debug, Clone, PartialEq, Eq, Deref, TryFrom, Serialize, Deserialize)
        )]
        pub struct $ident(String);
    };
}

macro_rules! countries {
    ($($variant:ident => $iso:literal, $name:literal, $calling_code:literal;)*) => {
        /// Countries offered by the country selector of the phone inputs.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Country {
            $($variant,)*
        }

        impl Country {
            pub const ALL: &'static [Country] = &[$(Country::$variant,)*];

            /// ISO 3166-1 alpha-2 code
            pub fn iso_code(self) -> &'static str {
                match self {
                    $(Country::$variant => $iso,)*
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Country::$variant => $name,)*
                }
            }

            pub fn calling_code(self) -> u16 {
                match self {
                    $(Country::$variant => $calling_code,)*
                }
            }
        }
    };
}

pub(crate) use countries;
pub(crate) use nutype_string;

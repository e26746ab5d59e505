use sea_orm::entity::prelude::*;
use serde::Serialize;
use std::fmt;

pub mod constraints {
    pub const UC_LANGUAGES_NAME: &str = "UC_languages_name";
    pub const UC_LANGUAGES_SHORT_NAME: &str = "UC_languages_short_name";
}

pub const DEFAULT_MULTIPLIER: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub short_name: String,
    pub time_mul: f64,
    pub memory_mul: f64,
    /// Space separated, e.g. `cpp cc cxx`.
    pub extensions: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.split_whitespace()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_whitespace_separated() {
        let language = Model {
            id: 1,
            name: "GNU C++".to_owned(),
            short_name: "cpp".to_owned(),
            time_mul: DEFAULT_MULTIPLIER,
            memory_mul: DEFAULT_MULTIPLIER,
            extensions: " cpp  cc\tcxx ".to_owned(),
        };

        assert_eq!(language.extensions().collect::<Vec<_>>(), ["cpp", "cc", "cxx"]);
    }
}

use serde::{Serialize, Deserialize};


#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Judge {
    pub id: String,
    pub name: String,
}

impl Judge {
    pub fn new<I, N>(id: I, name: N) -> Self where I: Into<String>, N: Into<String> {
        Judge {
            id: id.into(),
            name: name.into()
        }
    }
}

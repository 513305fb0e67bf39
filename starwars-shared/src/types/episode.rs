//! Episode enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the films of the original trilogy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Episode {
    /// Star Wars Episode IV: A New Hope, released in 1977.
    NewHope,
    /// Star Wars Episode V: The Empire Strikes Back, released in 1980.
    Empire,
    /// Star Wars Episode VI: Return of the Jedi, released in 1983.
    Jedi,
}

impl Episode {
    /// All episodes in release order.
    pub const ALL: [Episode; 3] = [Episode::NewHope, Episode::Empire, Episode::Jedi];

    /// The wire name of the episode (`NEWHOPE`, `EMPIRE`, `JEDI`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Episode::NewHope => "NEWHOPE",
            Episode::Empire => "EMPIRE",
            Episode::Jedi => "JEDI",
        }
    }
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Episode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEWHOPE" => Ok(Episode::NewHope),
            "EMPIRE" => Ok(Episode::Empire),
            "JEDI" => Ok(Episode::Jedi),
            other => Err(format!("{} is not a valid Episode", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_wire_names() {
        assert_eq!(Episode::NewHope.to_string(), "NEWHOPE");
        assert_eq!("EMPIRE".parse::<Episode>(), Ok(Episode::Empire));
        assert!("empire".parse::<Episode>().is_err());
    }

    #[test]
    fn test_episode_serde_matches_display() {
        for episode in Episode::ALL {
            let json = serde_json::to_string(&episode).unwrap();
            assert_eq!(json, format!("\"{}\"", episode));
        }
    }
}

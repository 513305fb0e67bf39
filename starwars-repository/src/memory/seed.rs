//! Sample dataset: the characters and starships of the original trilogy.

use starwars_shared::{Droid, Episode, Human, Starship};

/// Entities used to populate a store at startup.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub humans: Vec<Human>,
    pub droids: Vec<Droid>,
    pub starships: Vec<Starship>,
}

/// The full sample dataset: five humans, two droids and four starships.
pub fn starwars_dataset() -> Dataset {
    use Episode::{Empire, Jedi, NewHope};

    let humans = vec![
        Human::new("1000", "Luke Skywalker", 1.72)
            .with_mass(77.0)
            .with_friends(["1002", "1003", "2000", "2001"])
            .with_appearances([NewHope, Empire, Jedi])
            .with_starships(["3001", "3003"]),
        Human::new("1001", "Darth Vader", 2.02)
            .with_mass(136.0)
            .with_friends(["1004"])
            .with_appearances([NewHope, Empire, Jedi])
            .with_starships(["3002"]),
        Human::new("1002", "Han Solo", 1.8)
            .with_mass(80.0)
            .with_friends(["1000", "1003", "2001"])
            .with_appearances([NewHope, Empire, Jedi])
            .with_starships(["3000", "3003"]),
        Human::new("1003", "Leia Organa", 1.5)
            .with_mass(49.0)
            .with_friends(["1000", "1002", "2000", "2001"])
            .with_appearances([NewHope, Empire, Jedi]),
        Human::new("1004", "Wilhuff Tarkin", 1.8)
            .with_mass(0.0)
            .with_friends(["1001"])
            .with_appearances([NewHope]),
    ];

    let droids = vec![
        Droid::new("2000", "C-3PO")
            .with_friends(["1000", "1002", "1003", "2001"])
            .with_appearances([NewHope, Empire, Jedi])
            .with_primary_function("Protocol"),
        Droid::new("2001", "R2-D2")
            .with_friends(["1000", "1002", "1003"])
            .with_appearances([NewHope, Empire, Jedi])
            .with_primary_function("Astromech"),
    ];

    let starships = vec![
        Starship::new("3000", "Millennium Falcon", 34.37)
            .with_history([[1, 2], [4, 5], [1, 2], [3, 2]]),
        Starship::new("3001", "X-Wing", 12.5).with_history([[6, 4], [3, 2], [2, 3], [5, 1]]),
        Starship::new("3002", "TIE Advanced x1", 9.2)
            .with_history([[3, 2], [7, 2], [6, 4], [3, 2]]),
        Starship::new("3003", "Imperial shuttle", 20.0)
            .with_history([[1, 7], [3, 5], [5, 3], [7, 1]]),
    ];

    Dataset {
        humans,
        droids,
        starships,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_references_resolve() {
        let dataset = starwars_dataset();
        let character_ids: HashSet<&str> = dataset
            .humans
            .iter()
            .map(|h| h.id.as_str())
            .chain(dataset.droids.iter().map(|d| d.id.as_str()))
            .collect();
        let starship_ids: HashSet<&str> =
            dataset.starships.iter().map(|s| s.id.as_str()).collect();

        for human in &dataset.humans {
            assert!(human.friends.iter().all(|f| character_ids.contains(f.id.as_str())));
            assert!(human.starships.iter().all(|s| starship_ids.contains(s.id.as_str())));
        }
        for droid in &dataset.droids {
            assert!(droid.friends.iter().all(|f| character_ids.contains(f.id.as_str())));
        }
    }
}

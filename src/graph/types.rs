//! Core type definitions for the movie graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct MovieId(pub u32);

impl MovieId {
    pub fn new(id: u32) -> Self {
        MovieId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovieId({})", self.0)
    }
}

impl From<u32> for MovieId {
    fn from(id: u32) -> Self {
        MovieId(id)
    }
}

/// Unique identifier for an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ActorId(pub u32);

impl ActorId {
    pub fn new(id: u32) -> Self {
        ActorId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.0)
    }
}

impl From<u32> for ActorId {
    fn from(id: u32) -> Self {
        ActorId(id)
    }
}

/// Unique identifier for a director
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct DirectorId(pub u32);

impl DirectorId {
    pub fn new(id: u32) -> Self {
        DirectorId(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for DirectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DirectorId({})", self.0)
    }
}

impl From<u32> for DirectorId {
    fn from(id: u32) -> Self {
        DirectorId(id)
    }
}

/// Unique identifier for a cast role edge
///
/// Role ids are allocated by the store, never by ingestion data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct RoleId(pub u64);

impl RoleId {
    pub fn new(id: u64) -> Self {
        RoleId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoleId({})", self.0)
    }
}

/// Actor gender, as recorded in the source dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Map the dataset's single-letter code. Any other code is rejected
    /// upstream by the loader.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// The closed set of movie genres used by the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Genre {
    Action,
    Adult,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    FilmNoir,
    Horror,
    Music,
    Musical,
    Mystery,
    Romance,
    SciFi,
    Short,
    Thriller,
    War,
    Western,
}

impl Genre {
    /// All genres, in dataset order.
    pub const ALL: [Genre; 21] = [
        Genre::Action,
        Genre::Adult,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::FilmNoir,
        Genre::Horror,
        Genre::Music,
        Genre::Musical,
        Genre::Mystery,
        Genre::Romance,
        Genre::SciFi,
        Genre::Short,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
    ];

    /// Map a dataset display string to its genre tag.
    pub fn from_label(label: &str) -> Option<Self> {
        let genre = match label {
            "Action" => Genre::Action,
            "Adult" => Genre::Adult,
            "Adventure" => Genre::Adventure,
            "Animation" => Genre::Animation,
            "Comedy" => Genre::Comedy,
            "Crime" => Genre::Crime,
            "Documentary" => Genre::Documentary,
            "Drama" => Genre::Drama,
            "Family" => Genre::Family,
            "Fantasy" => Genre::Fantasy,
            "Film-Noir" => Genre::FilmNoir,
            "Horror" => Genre::Horror,
            "Music" => Genre::Music,
            "Musical" => Genre::Musical,
            "Mystery" => Genre::Mystery,
            "Romance" => Genre::Romance,
            "Sci-Fi" => Genre::SciFi,
            "Short" => Genre::Short,
            "Thriller" => Genre::Thriller,
            "War" => Genre::War,
            "Western" => Genre::Western,
            _ => return None,
        };
        Some(genre)
    }

    /// The dataset display string for this genre.
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adult => "Adult",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Documentary => "Documentary",
            Genre::Drama => "Drama",
            Genre::Family => "Family",
            Genre::Fantasy => "Fantasy",
            Genre::FilmNoir => "Film-Noir",
            Genre::Horror => "Horror",
            Genre::Music => "Music",
            Genre::Musical => "Musical",
            Genre::Mystery => "Mystery",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Short => "Short",
            Genre::Thriller => "Thriller",
            Genre::War => "War",
            Genre::Western => "Western",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Set of genres attached to a movie, packed as a bitmask over the
/// closed 21-variant enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreSet(u32);

impl GenreSet {
    pub fn new() -> Self {
        GenreSet(0)
    }

    pub fn insert(&mut self, genre: Genre) {
        self.0 |= 1 << genre as u32;
    }

    pub fn contains(&self, genre: Genre) -> bool {
        self.0 & (1 << genre as u32) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Genre> + '_ {
        Genre::ALL.iter().copied().filter(|g| self.contains(*g))
    }
}

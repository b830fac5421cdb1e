//! JSON-backed recipe source.
//!
//! Recipes are stored as a top-level JSON array using the catalogue wire
//! keys. The default data set is embedded in the binary; a file path can be
//! configured instead.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use tracing::info;

use crate::domain::Recipe;
use crate::domain::ports::{RecipeSource, RecipeSourceError};

const BUNDLED_RECIPES: &str = include_str!("../../data/recipes.json");

/// Where [`JsonRecipeSource`] reads its data from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JsonRecipeSource {
    /// The data set compiled into the binary.
    #[default]
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
}

impl JsonRecipeSource {
    /// Use `path` when given, the bundled data otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Bundled, Self::File)
    }

    fn read(&self) -> Result<String, RecipeSourceError> {
        match self {
            Self::Bundled => Ok(BUNDLED_RECIPES.to_owned()),
            Self::File(path) => read_file(path),
        }
    }
}

impl RecipeSource for JsonRecipeSource {
    fn load(&self) -> Result<Vec<Recipe>, RecipeSourceError> {
        let contents = self.read()?;
        let recipes = parse_recipes(&contents)?;
        match self {
            Self::Bundled => info!(count = recipes.len(), "loaded bundled recipes"),
            Self::File(path) => info!(
                count = recipes.len(),
                path = %path.display(),
                "loaded recipes from file"
            ),
        }
        Ok(recipes)
    }
}

fn parse_recipes(contents: &str) -> Result<Vec<Recipe>, RecipeSourceError> {
    serde_json::from_str(contents).map_err(|err| RecipeSourceError::parse(err.to_string()))
}

fn read_file(path: &Path) -> Result<String, RecipeSourceError> {
    let read_error = |message: String| RecipeSourceError::read(path.display().to_string(), message);

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error("recipes path must name a file".to_owned()))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| read_error(err.to_string()))?;
    dir.read_to_string(Path::new(file_name))
        .map_err(|err| read_error(err.to_string()))
}

use clap::Subcommand;

/// Top-level command tree. One subcommand per pet API operation.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the storage file if it does not exist.
    Init,
    /// Add a new pet to the store.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        /// Repeat for several tags.
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Find pets by ID.
    Get { pet_id: i64 },
    /// List every pet.
    List,
    /// Find pets by status (comma separated values).
    FindByStatus {
        #[arg(required = true)]
        status: Vec<String>,
    },
    /// Find pets carrying every given tag (comma separated values).
    FindByTags { tags: Vec<String> },
    /// Find pets carrying a single tag.
    FindByTag { tag: String },
    /// Delete a pet.
    Delete {
        pet_id: i64,
        /// Accepted for API compatibility; not checked.
        #[arg(long)]
        api_key: Option<String>,
    },
    /// Update an existing pet.
    Update {
        #[arg(long)]
        body: Option<String>,
    },
    /// Update a pet with form data.
    UpdateForm { pet_id: i64 },
    /// Upload an image for a pet.
    UploadImage { pet_id: i64 },
}

impl Commands {
    /// Whether the command never touches the store.
    #[must_use]
    pub const fn is_stub(&self) -> bool {
        matches!(
            self,
            Self::Update { .. } | Self::UpdateForm { .. } | Self::UploadImage { .. }
        )
    }
}

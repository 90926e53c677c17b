//! Static command registry backing `sprout help`.

pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        description: "Show every command with a usage example.",
        example: "sprout help",
    },
    CommandInfo {
        name: "list",
        description: "Print the default packages installed by a plain run.",
        example: "sprout list",
    },
    CommandInfo {
        name: "--remove",
        description: "Exclude one or more packages from the default set.",
        example: "sprout --remove django-filter",
    },
    CommandInfo {
        name: "--add",
        description: "Install one or more extra packages.",
        example: "sprout --add numpy django-allauth",
    },
    CommandInfo {
        name: "--name",
        description: "Use a custom project name instead of 'base'.",
        example: "sprout --name core",
    },
    CommandInfo {
        name: "--dir",
        description: "Create a new directory and place everything inside it.",
        example: "sprout --dir blog_api",
    },
    CommandInfo {
        name: "--dry-run",
        description: "Print the resolved plan without touching anything.",
        example: "sprout --remove django-filter --dry-run",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_entries_are_complete() {
        for command in COMMANDS {
            assert!(!command.name.is_empty());
            assert!(!command.description.is_empty());
            assert!(command.example.starts_with("sprout"));
        }
    }
}

// Static component catalog with search and category filtering

/// Category value that matches every component
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub code: &'static str,
}

pub const COMPONENTS: &[ComponentEntry] = &[
    ComponentEntry {
        id: "button-1",
        name: "Button",
        description: "A clickable button component with various styles and states.",
        category: "inputs",
        code: "import { Button } from \"./ui/button\";\n\n<Button variant=\"default\">Button</Button>",
    },
    ComponentEntry {
        id: "card-1",
        name: "Card",
        description: "A container component for grouping related content.",
        category: "layout",
        code: "import { Card, CardHeader, CardTitle, CardDescription, CardContent } from \"./ui/card\";\n\n\
<Card>\n  <CardHeader>\n    <CardTitle>Card Title</CardTitle>\n    <CardDescription>Card Description</CardDescription>\n  </CardHeader>\n  <CardContent>\n    <p>Card Content</p>\n  </CardContent>\n</Card>",
    },
    ComponentEntry {
        id: "input-1",
        name: "Input",
        description: "A form input component for collecting user data.",
        category: "inputs",
        code: "import { Input } from \"./ui/input\";\n\n<Input placeholder=\"Enter text here...\" />",
    },
    ComponentEntry {
        id: "badge-1",
        name: "Badge",
        description: "A small visual indicator component.",
        category: "display",
        code: "import { Badge } from \"./ui/badge\";\n\n<Badge>New</Badge>",
    },
    ComponentEntry {
        id: "select-1",
        name: "Select",
        description: "A dropdown selection component.",
        category: "inputs",
        code: "import { Select, SelectTrigger, SelectValue, SelectContent, SelectItem } from \"./ui/select\";\n\n\
<Select>\n  <SelectTrigger>\n    <SelectValue placeholder=\"Select an option\" />\n  </SelectTrigger>\n  <SelectContent>\n    <SelectItem value=\"option1\">Option 1</SelectItem>\n    <SelectItem value=\"option2\">Option 2</SelectItem>\n    <SelectItem value=\"option3\">Option 3</SelectItem>\n  </SelectContent>\n</Select>",
    },
];

// "all" followed by each distinct category in catalog order
pub fn categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for entry in COMPONENTS {
        if !categories.contains(&entry.category) {
            categories.push(entry.category);
        }
    }
    categories
}

// Case-insensitive match on name or description, restricted to a category
pub fn filter<'a>(
    entries: &'a [ComponentEntry],
    query: &str,
    category: &str,
) -> Vec<&'a ComponentEntry> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&query) || e.description.to_lowercase().contains(&query)
        })
        .filter(|e| category == ALL_CATEGORIES || e.category == category)
        .collect()
}

pub fn find(id: &str) -> Option<&'static ComponentEntry> {
    COMPONENTS.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_distinct_and_ordered() {
        assert_eq!(categories(), vec!["all", "inputs", "layout", "display"]);
    }

    #[test]
    fn empty_query_and_all_matches_everything() {
        assert_eq!(filter(COMPONENTS, "", ALL_CATEGORIES).len(), COMPONENTS.len());
    }

    #[test]
    fn query_matches_description_case_insensitively() {
        let hits = filter(COMPONENTS, "DROPDOWN", ALL_CATEGORIES);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Select");
    }

    #[test]
    fn category_narrows_results() {
        let names: Vec<&str> = filter(COMPONENTS, "", "inputs")
            .iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Button", "Input", "Select"]);
        assert!(filter(COMPONENTS, "card", "inputs").is_empty());
    }
}

//! # Listing Commands
//!
//! Read-only views of the inventory. Every handler works on a copy, so
//! sorting for display never reorders the live collection.

use std::io::{BufRead, Write};

use tracing::debug;

use super::Session;
use crate::error::AppResult;

/// Prints every item in insertion order.
pub fn list_all<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    let items = session.state.with_service(|s| s.collection().try_clone())?;
    session
        .console
        .print_collection(&items, "INFO: There are no products in the fridge.")
}

/// Prints items whose name contains the entered text, by quantity ascending.
pub fn list_by_substring<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    let text = session.console.read_text("Search: ")?;

    let mut items = session
        .state
        .with_service(|s| s.filter_by_name_substring(&text))?;
    items.sort_by_quantity(false);

    session.console.print_collection(
        &items,
        "INFO: There are no product names that contain the given string.",
    )
}

/// Prints every item by name ascending.
pub fn list_by_name<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    let mut items = session.state.with_service(|s| s.collection().try_clone())?;
    items.sort_by_name(false);

    session
        .console
        .print_collection(&items, "INFO: The repository is empty.")
}

/// Prints items of a category (none = any) that expire within N days.
pub fn list_expiring<R: BufRead, W: Write>(session: &mut Session<R, W>) -> AppResult<()> {
    let category = session.console.read_filter_category()?;
    let within_days = session.console.read_integer("Expires within days: ")?;
    let today = session.config.today();

    debug!(%category, within_days, %today, "Listing expiring items");
    let items = session.state.with_service(|s| {
        s.filter_by_category_and_expiration_at(category, within_days, today)
    })?;

    let empty = format!(
        "INFO: There are no products from the given category that expire in {within_days} days in the fridge."
    );
    session.console.print_collection(&items, &empty)
}

#[cfg(test)]
mod tests {
    use fridge_core::{Category, Date, InventoryService};

    use super::super::test_support::{output, session};
    use super::*;

    fn stocked() -> InventoryService {
        let mut service = InventoryService::new();
        service
            .add_item("test4", Category::Dairy, 6.0, Date::new(2022, 3, 15))
            .unwrap();
        service
            .add_item("test1", Category::Meat, 3.0, Date::new(2022, 3, 18))
            .unwrap();
        service
            .add_item("other", Category::Fruit, 5.0, Date::new(2022, 4, 30))
            .unwrap();
        service
    }

    /// Item lines of the output. The first one may follow an unterminated
    /// prompt such as "Search: ".
    fn lines(out: &str) -> Vec<&str> {
        out.lines()
            .filter_map(|l| l.find("Product ").map(|start| &l[start..]))
            .collect()
    }

    #[test]
    fn test_list_all() {
        let mut s = session(stocked(), "");
        list_all(&mut s).unwrap();

        let out = output(s);
        assert_eq!(
            lines(&out),
            vec![
                "Product test4 is part of the \"dairy\" category, there is 6 of it in the fridge, and it expires on 2022/03/15.",
                "Product test1 is part of the \"meat\" category, there is 3 of it in the fridge, and it expires on 2022/03/18.",
                "Product other is part of the \"fruit\" category, there is 5 of it in the fridge, and it expires on 2022/04/30.",
            ]
        );
    }

    #[test]
    fn test_list_all_empty() {
        let mut s = session(InventoryService::new(), "");
        list_all(&mut s).unwrap();
        assert_eq!(output(s), "INFO: There are no products in the fridge.\n");
    }

    #[test]
    fn test_list_by_substring_sorts_by_quantity() {
        let mut s = session(stocked(), "test\n");
        list_by_substring(&mut s).unwrap();

        let out = output(s);
        let shown = lines(&out);
        assert_eq!(shown.len(), 2);
        assert!(shown[0].starts_with("Product test1 "));
        assert!(shown[1].starts_with("Product test4 "));
    }

    #[test]
    fn test_list_by_substring_output_follows_prompt() {
        let mut s = session(stocked(), "test\n");
        list_by_substring(&mut s).unwrap();

        assert_eq!(
            output(s),
            "Search: Product test1 is part of the \"meat\" category, there is 3 of it in the fridge, and it expires on 2022/03/18.\n\
             Product test4 is part of the \"dairy\" category, there is 6 of it in the fridge, and it expires on 2022/03/15.\n"
        );
    }

    #[test]
    fn test_list_by_substring_no_match() {
        let mut s = session(stocked(), "zzz\n");
        list_by_substring(&mut s).unwrap();
        assert!(output(s).contains("INFO: There are no product names that contain the given string."));
    }

    #[test]
    fn test_list_by_name_leaves_live_order() {
        let mut s = session(stocked(), "");
        list_by_name(&mut s).unwrap();

        let live: Vec<String> = s.state.with_service(|svc| {
            svc.collection().iter().map(|i| i.name().to_string()).collect()
        });
        assert_eq!(live, vec!["test4", "test1", "other"]);

        let out = output(s);
        let shown = lines(&out);
        assert!(shown[0].starts_with("Product other "));
        assert!(shown[1].starts_with("Product test1 "));
        assert!(shown[2].starts_with("Product test4 "));
    }

    #[test]
    fn test_list_by_name_empty() {
        let mut s = session(InventoryService::new(), "");
        list_by_name(&mut s).unwrap();
        assert_eq!(output(s), "INFO: The repository is empty.\n");
    }

    #[test]
    fn test_list_expiring() {
        // today is pinned to 2022-03-10: test4 in 5 days, test1 in 8 days
        let mut s = session(stocked(), "0\n7\n");
        list_expiring(&mut s).unwrap();

        let out = output(s);
        let shown = lines(&out);
        assert_eq!(shown.len(), 1);
        assert!(shown[0].starts_with("Product test4 "));
    }

    #[test]
    fn test_list_expiring_none_found() {
        let mut s = session(stocked(), "3\n2\n");
        list_expiring(&mut s).unwrap();
        assert!(output(s).contains(
            "INFO: There are no products from the given category that expire in 2 days in the fridge."
        ));
    }
}

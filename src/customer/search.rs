use super::types::Customer;

/// Customers whose name contains `term`, ignoring case, in collection order.
///
/// Customers without a name never match. An empty term matches every named
/// customer.
pub fn search_by_name<'a>(customers: &'a [Customer], term: &str) -> Vec<&'a Customer> {
    let needle = term.to_lowercase();
    customers
        .iter()
        .filter(|customer| {
            customer
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .collect()
}

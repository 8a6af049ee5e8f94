/// Currency code (e.g. "USD") - primary key of the registry
pub type CurrencyCode = String;

/// Currency symbol (e.g. "$", "₽") - not unique across currencies
pub type Symbol = String;

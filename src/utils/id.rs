const ID_ALPHABET: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Length of generated document identifiers
pub const DOCUMENT_ID_LEN: usize = 24;

/// Generates the identifier of a stored report or comparison document.
///
/// Identifiers are `DOCUMENT_ID_LEN` characters of uppercase letters and
/// digits produced by `nanoid`, so they are safe to embed in URLs and logs.
///
/// # Examples
/// ```
/// use realty_genie::utils::id::new_document_id;
/// let id = new_document_id();
/// assert_eq!(id.len(), 24);
/// ```
pub fn new_document_id() -> String {
    nanoid::nanoid!(DOCUMENT_ID_LEN, &ID_ALPHABET)
}

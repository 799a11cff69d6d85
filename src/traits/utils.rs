/// Checks that a kind name is a lowercase identifier (`[a-z][a-z0-9_]*`).
///
/// Runs in const context wherever a kind is turned into a description or a
/// registry entry, so a malformed name fails the build.
#[track_caller]
pub const fn validate_kind_name(name: &'static str) {
    let bytes = name.as_bytes();
    if bytes.is_empty() {
        const_panic::concat_panic!("collection kind name must not be empty")
    }
    if !bytes[0].is_ascii_lowercase() {
        const_panic::concat_panic!("collection kind name must start with a lowercase letter: ", name)
    }
    let mut i = 1;
    while i < bytes.len() {
        let byte = bytes[i];
        if !(byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'_') {
            const_panic::concat_panic!("collection kind name may only hold [a-z0-9_]: ", name)
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::validate_kind_name;

    const _: () = validate_kind_name("sequence");
    const _: () = validate_kind_name("hash_set2");

    #[test]
    #[should_panic(expected = "must start with a lowercase letter")]
    fn rejects_leading_digit() {
        validate_kind_name("2set");
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn rejects_empty() {
        validate_kind_name("");
    }

    #[test]
    #[should_panic(expected = "may only hold")]
    fn rejects_uppercase_tail() {
        validate_kind_name("hashSet");
    }
}

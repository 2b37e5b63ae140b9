/// Takes the owned value out of a `Cow` returned by a rewriting call such
/// as `Regex::replace_all`. A borrowed `Cow` means nothing was rewritten,
/// so `$default` (the untouched input, already owned) is returned instead
/// of a copy.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;

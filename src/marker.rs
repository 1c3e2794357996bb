//! Recognisers for the pieces of a sheet line the scanner cares about:
//! the filename comment and the svg element boundaries.
use nom::{
    bytes::complete::{tag, take_until},
    combinator::map_opt,
    error::VerboseError,
    sequence::delimited,
    IResult, Parser,
};

pub const OPEN_TAG: &str = "<svg";
pub const CLOSE_TAG: &str = "</svg>";
pub const ICON_EXT: &str = ".svg";

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// A comment whose body, trimmed, is a filename ending in `.svg`.
fn comment(i: &str) -> IResult<&str, &str, VerboseError<&str>> {
    let name = map_opt(take_until(COMMENT_CLOSE), |body: &str| {
        let body = body.trim();
        (body.len() > ICON_EXT.len() && body.ends_with(ICON_EXT)).then_some(body)
    });
    delimited(tag(COMMENT_OPEN), name, tag(COMMENT_CLOSE)).parse(i)
}

/// The filename named by the first marker comment in the line, if any.
pub fn marker(line: &str) -> Option<&str> {
    line.match_indices(COMMENT_OPEN)
        .find_map(|(at, _)| comment(&line[at..]).ok().map(|(_, name)| name))
}

/// Byte offset of the first opening tag.
pub fn open_tag(line: &str) -> Option<usize> {
    line.find(OPEN_TAG)
}

pub fn closes(line: &str) -> bool {
    line.contains(CLOSE_TAG)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn comment_test() {
        let output = comment("<!-- 24x24-plus.svg --><svg>");
        assert_eq!(output, Ok(("<svg>", "24x24-plus.svg")))
    }

    #[test]
    fn marker_anywhere_test() {
        assert_eq!(marker("  <g/> <!--a.svg-->"), Some("a.svg"));
        assert_eq!(marker("<!-- note --> <!-- b.svg -->"), Some("b.svg"));
    }

    #[test]
    fn not_a_marker_test() {
        assert_eq!(marker("<!-- a.png -->"), None);
        assert_eq!(marker("<!-- .svg -->"), None);
        assert_eq!(marker("<!-- a.svg"), None);
        assert_eq!(marker("a.svg -->"), None);
        assert_eq!(marker("<svg></svg>"), None);
    }

    #[test]
    fn tag_test() {
        assert_eq!(open_tag("<!-- a.svg --><svg x=\"1\">"), Some(14));
        assert_eq!(open_tag("</svg>"), None);
        assert!(closes("<path/></svg>"));
        assert!(!closes("<svg>"));
    }
}

use crate::crawler::LinkSets;
use std::collections::BTreeSet;
use std::io::{self, Write};
use url::Url;

/// Maps each link to the directory that contains it
///
/// `https://x.com/a/b` becomes `https://x.com/a/`; links whose path already
/// ends in `/` keep that path. Query strings and fragments are dropped, and
/// so is userinfo. Links that do not parse are kept as they are.
///
/// # Examples
///
/// ```
/// use sitemapper::output::to_directories;
///
/// let links = vec![
///     "https://x.com/a/b".to_string(),
///     "https://x.com/a/c".to_string(),
/// ];
/// let dirs = to_directories(&links);
/// assert_eq!(dirs.into_iter().collect::<Vec<_>>(), vec!["https://x.com/a/"]);
/// ```
pub fn to_directories<'a, I>(links: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    links.into_iter().map(|link| directory_of(link)).collect()
}

fn directory_of(link: &str) -> String {
    let Ok(parsed) = Url::parse(link) else {
        return link.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return link.to_string();
    };

    let path = parsed.path();
    let directory = if path.ends_with('/') {
        path
    } else {
        path.rsplit_once('/').map_or("", |(head, _)| head)
    };
    let separator = if directory.ends_with('/') { "" } else { "/" };

    match parsed.port() {
        Some(port) => format!(
            "{}://{}:{}{}{}",
            parsed.scheme(),
            host,
            port,
            directory,
            separator
        ),
        None => format!("{}://{}{}{}", parsed.scheme(), host, directory, separator),
    }
}

/// Writes the final report
///
/// Internal and external links are listed in full when `full_links` is set,
/// otherwise as directories. The mailto and non-HTML sections only appear
/// in full-link mode.
pub fn write_report<W: Write>(links: &LinkSets, full_links: bool, out: &mut W) -> io::Result<()> {
    if full_links {
        write_section(out, "internal links", &links.internal)?;
        write_section(out, "external links", &links.external)?;
        write_section(out, "email links", &links.mailto)?;
        write_section(out, "non-HTML links", &links.non_html)?;
    } else {
        write_section(out, "internal directories", &to_directories(&links.internal))?;
        write_section(out, "external directories", &to_directories(&links.external))?;
    }
    out.flush()
}

/// Prints the final report to stdout
pub fn print_report(links: &LinkSets, full_links: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(links, full_links, &mut handle)
}

fn write_section<W: Write>(out: &mut W, title: &str, items: &BTreeSet<String>) -> io::Result<()> {
    writeln!(out, "\nFound {} {}:", items.len(), title)?;
    for item in items {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}

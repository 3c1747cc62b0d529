use colored::Colorize;

use crate::schemas::Movie;

/// Render a movie for one-shot terminal output.
///
/// Empty fields are skipped so a sparse record does not print a wall of
/// blank labels.
pub fn format_movie(movie: &Movie, use_color: bool) -> String {
    let mut lines = Vec::new();

    let title = if movie.title.is_empty() {
        "(untitled)".to_string()
    } else {
        movie.title.clone()
    };
    if use_color {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title);
    }

    let mut field = |label: &str, value: &str| {
        if value.is_empty() {
            return;
        }
        if use_color {
            lines.push(format!("{} {}", format!("{label}:").cyan(), value));
        } else {
            lines.push(format!("{label}: {value}"));
        }
    };

    field("IMDB Score", &movie.imdb_rating);
    field("Awards", &movie.awards);
    field("Released", &movie.released);
    field("Runtime", &movie.runtime);
    field("Genre", &movie.genre);
    field("Director", &movie.director);
    field("Writer", &movie.writer);
    field("Actors", &movie.actors);
    field("Poster", &movie.poster);

    if !movie.plot.is_empty() {
        lines.push(String::new());
        lines.push(movie.plot.clone());
    }

    lines.join("\n")
}

/// Render the search-history list for one-shot terminal output.
pub fn format_history(entries: &[String], use_color: bool) -> String {
    if entries.is_empty() {
        return "No search history.".to_string();
    }

    let header = if use_color {
        format!("Search history ({}):", entries.len())
            .bold()
            .to_string()
    } else {
        format!("Search history ({}):", entries.len())
    };

    let mut lines = vec![header];
    for (index, entry) in entries.iter().enumerate() {
        lines.push(format!("{:>3}. {entry}", index + 1));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Movie {
        Movie {
            imdb_id: "tt1375666".to_string(),
            title: "Inception".to_string(),
            imdb_rating: "8.8".to_string(),
            released: "16 Jul 2010".to_string(),
            plot: "A thief who steals corporate secrets.".to_string(),
            ..Movie::default()
        }
    }

    #[test]
    fn plain_output_contains_populated_fields_only() {
        let out = format_movie(&sample_movie(), false);
        assert!(out.starts_with("Inception"));
        assert!(out.contains("IMDB Score: 8.8"));
        assert!(out.contains("Released: 16 Jul 2010"));
        assert!(out.contains("A thief who steals corporate secrets."));
        assert!(!out.contains("Awards:"));
        assert!(!out.contains("Runtime:"));
    }

    #[test]
    fn untitled_movie_gets_placeholder() {
        let movie = Movie::default();
        assert!(format_movie(&movie, false).starts_with("(untitled)"));
    }

    #[test]
    fn history_is_numbered_in_order() {
        let entries = vec!["Inception".to_string(), "Heat".to_string()];
        let out = format_history(&entries, false);
        assert!(out.starts_with("Search history (2):"));
        assert!(out.contains("  1. Inception"));
        assert!(out.contains("  2. Heat"));
    }

    #[test]
    fn empty_history_prints_notice() {
        assert_eq!(format_history(&[], false), "No search history.");
    }
}

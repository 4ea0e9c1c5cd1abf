use core::fmt;

/// A book that can be stored in a [`BookCollection`](crate::BookCollection).
pub trait Book: fmt::Debug {
    /// Returns the title of the book.
    fn title(&self) -> &str;
    /// Returns the author of the book.
    fn author(&self) -> &str;
}

/// A plain book made of its title, author and publication year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookRecord {
    title: String,
    author: String,
    year: i32,
}

impl BookRecord {
    pub fn new<T, A>(title: T, author: A, year: i32) -> Self
    where
        T: Into<String>,
        A: Into<String>,
    {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// Returns the year the book was first published.
    #[inline]
    pub fn year(&self) -> i32 {
        self.year
    }
}

impl Book for BookRecord {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} by {} ({})", self.title, self.author, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        BookCollection,
        Collection,
    };

    /// A book type living outside of this module.
    #[derive(Debug)]
    struct Manuscript {
        working_title: &'static str,
    }

    impl Book for Manuscript {
        fn title(&self) -> &str {
            self.working_title
        }

        fn author(&self) -> &str {
            "anonymous"
        }
    }

    fn book(title: &str, author: &str) -> Box<dyn Book> {
        Box::new(BookRecord::new(title, author, 0))
    }

    fn titles(books: &BookCollection) -> Vec<&str> {
        books.values().map(|book| book.title()).collect()
    }

    #[test]
    fn book_collection_works() {
        let mut books = BookCollection::new();
        books
            .push(book("Dune", "Frank Herbert"))
            .push(book("Hyperion", "Dan Simmons"))
            .unshift(Box::new(Manuscript {
                working_title: "Untitled",
            }));
        assert_eq!(titles(&books), vec!["Untitled", "Dune", "Hyperion"]);
        assert_eq!(books.get(1).map(|book| book.author()), Some("Frank Herbert"));
        let shifted = books.shift().map(|book| book.author().to_string());
        assert_eq!(shifted.as_deref(), Some("anonymous"));
        assert_eq!(books.count(), 2);
        assert_eq!(books.get(0).map(|book| book.title()), Some("Dune"));
    }

    #[test]
    fn named_books_work() {
        let mut books = BookCollection::new();
        books.set("classic", book("Dune", "Frank Herbert"));
        assert!(books.exists("classic"));
        assert!(!books.exists("missing"));
        assert_eq!(books.get("missing").map(|book| book.title()), None);
        books.set("classic", book("Solaris", "Stanisław Lem"));
        assert_eq!(books.len(), 1);
        assert_eq!(books["classic"].title(), "Solaris");
        books.remove("classic");
        assert!(books.is_empty());
        assert!(books.pop().is_none());
        assert!(books.shift().is_none());
    }

    #[test]
    fn book_record_works() {
        let record = BookRecord::new("Dune", String::from("Frank Herbert"), 1965);
        assert_eq!(record.title(), "Dune");
        assert_eq!(record.author(), "Frank Herbert");
        assert_eq!(record.year(), 1965);
        assert_eq!(record.to_string(), "Dune by Frank Herbert (1965)");
        assert_ne!(record, BookRecord::new("Dune", "Frank Herbert", 1984));
    }
}

/*!

# Visitor

Suppose several unrelated types all need the same family of extra operations: write to a
database, write to a text file, write to JSON. Adding `write_to_database`, `write_to_textfile`,
and so on to every type smears each operation across the codebase. The visitor pattern turns
this inside out: each *operation* becomes one type, a visitor, with one method per element type,
and each element gets a single `accept` method that calls the right one.

```text
   Person ──accept──▶ visitor.visit_person(&person)
 Landmark ──accept──▶ visitor.visit_landmark(&landmark)
      Car ──accept──▶ visitor.visit_car(&car)
```

## Correctness via Macro

The `accept` methods are pure boilerplate, and boilerplate is where a copy-paste bug sends
`Car` to `visit_landmark`. So we don't write them by hand. The `visitable!` macro takes the
list of element types and generates both the [`Visitor`] trait, with one `visit_<element>`
method per type, and every `accept`. `paste` builds the method names. Adding an element type
is then a one-word change, and the compiler points at every visitor that doesn't handle it.

## Visitors That Return Things

The textbook visitor returns `void` and does its work through side effects. Rust's visitors
usually carry an associated `Output` type instead (see `syn::visit` or `serde::de::Visitor`),
which lets a visitor compute a value, return a `Result`, or still return `()` when it really is
all side effects. [`DatabaseVisitor`] returns `()` and records rows; [`TextFileVisitor`] writes to
any `io::Write` and returns `io::Result<()>`.

*/

use std::io::{self, Write};

/// Something a [`Visitor`] can visit.
pub trait Visitable {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output;
}

/// Generates the [`Visitor`] trait and a [`Visitable`] impl for each listed element type.
macro_rules! visitable {
    ($($element:ident),+ $(,)?) => {
        paste::paste! {
            /// One method per element type. Generated by `visitable!`.
            pub trait Visitor {
                type Output;

                $(
                    fn [<visit_ $element:snake>](&mut self, element: &$element) -> Self::Output;
                )+
            }

            $(
                impl Visitable for $element {
                    fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Output {
                        visitor.[<visit_ $element:snake>](self)
                    }
                }
            )+
        }
    };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landmark {
    pub name: String,
    pub city: String,
}

impl Landmark {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Car {
    pub make: String,
    pub model: String,
}

impl Car {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
        }
    }
}

visitable!(Person, Landmark, Car);

/// Records one row per visited element.
#[derive(Debug, Default)]
pub struct DatabaseVisitor {
    rows: Vec<String>,
}

impl DatabaseVisitor {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl Visitor for DatabaseVisitor {
    type Output = ();

    fn visit_person(&mut self, person: &Person) {
        self.rows.push(format!(
            "Writing person to the database: {}, {}",
            person.name, person.age
        ));
    }

    fn visit_landmark(&mut self, landmark: &Landmark) {
        self.rows.push(format!(
            "Writing landmark to the database: {}, {}",
            landmark.name, landmark.city
        ));
    }

    fn visit_car(&mut self, car: &Car) {
        self.rows.push(format!(
            "Writing car to the database: {}, {}",
            car.make, car.model
        ));
    }
}

/// Writes one line per visited element to `W`.
pub struct TextFileVisitor<W: Write> {
    out: W,
}

impl<W: Write> TextFileVisitor<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Visitor for TextFileVisitor<W> {
    type Output = io::Result<()>;

    fn visit_person(&mut self, person: &Person) -> io::Result<()> {
        writeln!(
            self.out,
            "Writing person to the textfile: {}, {}",
            person.name, person.age
        )
    }

    fn visit_landmark(&mut self, landmark: &Landmark) -> io::Result<()> {
        writeln!(
            self.out,
            "Writing landmark to the textfile: {}, {}",
            landmark.name, landmark.city
        )
    }

    fn visit_car(&mut self, car: &Car) -> io::Result<()> {
        writeln!(
            self.out,
            "Writing car to the textfile: {}, {}",
            car.make, car.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (Person, Landmark, Car) {
        (
            Person::new("John", 39),
            Landmark::new("LaCasa", "Bengaluru"),
            Car::new("Chevrolet", "Camaro"),
        )
    }

    #[test]
    fn database_visitor_records_each_element() {
        let (person, landmark, car) = scenario();
        let mut visitor = DatabaseVisitor::default();
        person.accept(&mut visitor);
        landmark.accept(&mut visitor);
        car.accept(&mut visitor);
        assert_eq!(
            visitor.rows(),
            [
                "Writing person to the database: John, 39",
                "Writing landmark to the database: LaCasa, Bengaluru",
                "Writing car to the database: Chevrolet, Camaro",
            ]
        );
    }

    #[test]
    fn text_file_visitor_writes_lines() -> io::Result<()> {
        let (person, landmark, car) = scenario();
        let mut visitor = TextFileVisitor::new(Vec::new());
        person.accept(&mut visitor)?;
        landmark.accept(&mut visitor)?;
        car.accept(&mut visitor)?;
        let written = String::from_utf8(visitor.into_inner()).unwrap();
        assert_eq!(
            written,
            "Writing person to the textfile: John, 39\n\
             Writing landmark to the textfile: LaCasa, Bengaluru\n\
             Writing car to the textfile: Chevrolet, Camaro\n"
        );
        Ok(())
    }

    #[test]
    fn visitors_can_compute_values() {
        struct Describe;
        impl Visitor for Describe {
            type Output = String;
            fn visit_person(&mut self, p: &Person) -> String {
                p.name.clone()
            }
            fn visit_landmark(&mut self, l: &Landmark) -> String {
                l.city.clone()
            }
            fn visit_car(&mut self, c: &Car) -> String {
                c.model.clone()
            }
        }

        let (person, landmark, car) = scenario();
        assert_eq!(person.accept(&mut Describe), "John");
        assert_eq!(landmark.accept(&mut Describe), "Bengaluru");
        assert_eq!(car.accept(&mut Describe), "Camaro");
    }
}

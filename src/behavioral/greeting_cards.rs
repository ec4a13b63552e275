/*!

# Template Method Meets Visitor

Patterns compose. A greeting card template from [`template_method`](super::template_method)
already knows how to assemble a card given a name. Make the template a
[`Visitor`](super::visitor::Visitor) of people and it can address itself: the generator walks
its list of people and lets each one `accept` the card, which pulls the name out and fills in
the template.

Swapping the template (birthday, Pongal, ...) changes every card the generator produces
without touching the generator or the people.

A card only makes sense for a [`Person`]. Landmarks and cars are still visitable, so the card's
`Output` is an `Option<String>`: `Some(card)` for a person, `None` for anything else.

*/

use log::debug;
use thiserror::Error;

use crate::behavioral::{
    template_method::GreetingCard,
    visitor::{Car, Landmark, Person, Visitable, Visitor},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CardError {
    #[error("no card template has been chosen")]
    NoTemplate,
}

/// A card template signed by `from`, ready to visit recipients.
pub struct SignedCard {
    card: Box<dyn GreetingCard>,
    from: String,
}

impl SignedCard {
    pub fn new(card: impl GreetingCard + 'static, from: impl Into<String>) -> Self {
        Self {
            card: Box::new(card),
            from: from.into(),
        }
    }

    pub fn card_for(&mut self, person: &Person) -> Option<String> {
        person.accept(self)
    }
}

impl Visitor for SignedCard {
    type Output = Option<String>;

    fn visit_person(&mut self, person: &Person) -> Option<String> {
        let name = &person.name;
        Some(format!(
            "\nSending this card to {name}:\n\n{}{}\n{}",
            self.card.intro(name),
            self.card.occasion(),
            self.card.closing(&self.from)
        ))
    }

    fn visit_landmark(&mut self, _landmark: &Landmark) -> Option<String> {
        None
    }

    fn visit_car(&mut self, _car: &Car) -> Option<String> {
        None
    }
}

/// Holds a mailing list and the current card template.
#[derive(Default)]
pub struct GreetingCardGenerator {
    template: Option<SignedCard>,
    people: Vec<Person>,
}

impl GreetingCardGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&mut self, person: Person) {
        self.people.push(person);
    }

    /// Replaces the current template, returning the old one.
    pub fn set_template(&mut self, template: SignedCard) -> Option<SignedCard> {
        self.template.replace(template)
    }

    /// One card per person on the list, in the order they were added.
    pub fn create_greeting_cards(&mut self) -> Result<Vec<String>, CardError> {
        let template = self.template.as_mut().ok_or(CardError::NoTemplate)?;
        debug!("creating {} cards", self.people.len());
        Ok(self
            .people
            .iter()
            .filter_map(|person| person.accept(&mut *template))
            .collect())
    }
}

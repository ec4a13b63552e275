/*!

# Template Method

A base class fixes the *skeleton* of an algorithm in one non-virtual method and leaves the
individual steps as virtual "hooks" that subclasses may override. Here the skeleton is a
greeting card: an introduction, a line about the occasion, and a closing.

In Rust the hooks are default trait methods. The skeleton is the interesting part. If we put
`generate` on the trait itself, any implementor can override it, and the "template" is no
longer a template. We want the trait equivalent of a `final` method.

The trick is a separate trait with a blanket implementation:

```rust,ignore
pub trait Generate {
    fn generate(&self, to: &str, from: &str) -> String;
}

impl<C: GreetingCard + ?Sized> Generate for C { /* the skeleton */ }
```

Every `GreetingCard` gets `generate` for free, and no `GreetingCard` can supply its own:
a second impl of `Generate` for a type that is already a `GreetingCard` overlaps the blanket
impl and is rejected by coherence. The hooks stay overridable and the skeleton stays fixed.

The C++ version also marks the hooks `protected`. Rust has no such thing; trait methods are
exactly as visible as the trait. We live with that, since calling a hook directly is harmless.

*/

/// The overridable steps of a greeting card.
pub trait GreetingCard {
    fn intro(&self, to: &str) -> String {
        format!("Dear {to},\n")
    }

    fn occasion(&self) -> String {
        "Just writing to say hi! Hope all is well with you.\n".into()
    }

    fn closing(&self, from: &str) -> String {
        format!("Sincerely,\n{from}\n")
    }
}

/// The fixed skeleton. Implemented for every [`GreetingCard`] and overridable by none.
pub trait Generate {
    fn generate(&self, to: &str, from: &str) -> String;
}

impl<C: GreetingCard + ?Sized> Generate for C {
    fn generate(&self, to: &str, from: &str) -> String {
        let mut card = self.intro(to);
        card.push_str(&self.occasion());
        card.push_str(&self.closing(from));
        card
    }
}

/// Uses every default.
#[derive(Copy, Clone, Debug, Default)]
pub struct StandardCard;

impl GreetingCard for StandardCard {}

#[derive(Copy, Clone, Debug, Default)]
pub struct BirthdayCard;

impl GreetingCard for BirthdayCard {
    fn occasion(&self) -> String {
        "Happy birthday!! Hope you have a wonderful day and lot of cake.".into()
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct PongalCard;

impl GreetingCard for PongalCard {
    fn intro(&self, to: &str) -> String {
        format!("{to}!!!\n")
    }

    fn occasion(&self) -> String {
        "Happy Pongal!! Wish you and your family a wonderful day.".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_card_uses_every_default() {
        assert_eq!(
            StandardCard.generate("Bob", "Jane"),
            "Dear Bob,\nJust writing to say hi! Hope all is well with you.\nSincerely,\nJane\n"
        );
    }

    #[test]
    fn birthday_card_overrides_only_the_occasion() {
        assert_eq!(
            BirthdayCard.generate("Sashwin", "Meenu"),
            "Dear Sashwin,\nHappy birthday!! Hope you have a wonderful day and lot of cake.Sincerely,\nMeenu\n"
        );
    }

    #[test]
    fn pongal_card_overrides_intro_and_occasion() {
        assert_eq!(
            PongalCard.generate("Ashwad", "Sashwin"),
            "Ashwad!!!\nHappy Pongal!! Wish you and your family a wonderful day.Sincerely,\nSashwin\n"
        );
    }

    #[test]
    fn skeleton_works_through_a_trait_object() {
        let cards: Vec<Box<dyn GreetingCard>> = vec![Box::new(StandardCard), Box::new(PongalCard)];
        let intros: Vec<String> = cards
            .iter()
            .map(|card| card.generate("Ann", "Raj").lines().next().unwrap_or_default().to_string())
            .collect();
        assert_eq!(intros, ["Dear Ann,", "Ann!!!"]);
    }
}

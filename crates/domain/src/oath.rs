//! The Explorer's Oath ceremony
//!
//! Pledges are recited strictly in order. After the last pledge the
//! ceremony is sworn and stays sworn.

pub const OATH_PLEDGES: [&str; 5] = [
    "I promise to explore the world with curiosity and wonder!",
    "I will learn about different cultures and respect all people!",
    "I will protect our beautiful planet and its amazing creatures!",
    "I will share my discoveries with friends and family!",
    "I am ready to become a World Explorer!",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OathStatus {
    /// Waiting on the pledge at `index`
    Reciting { index: usize, pledge: &'static str },
    Sworn,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OathCeremony {
    recited: usize,
}

impl OathCeremony {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> OathStatus {
        match OATH_PLEDGES.get(self.recited) {
            Some(pledge) => OathStatus::Reciting {
                index: self.recited,
                pledge,
            },
            None => OathStatus::Sworn,
        }
    }

    /// Recite the current pledge and move to the next one.
    pub fn recite(&mut self) -> OathStatus {
        if self.recited < OATH_PLEDGES.len() {
            self.recited += 1;
        }
        self.status()
    }

    pub fn is_sworn(&self) -> bool {
        self.recited >= OATH_PLEDGES.len()
    }

    /// Pledges recited so far
    pub fn recited(&self) -> usize {
        self.recited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_recitations_swear_the_oath() {
        let mut ceremony = OathCeremony::new();
        assert_eq!(
            ceremony.status(),
            OathStatus::Reciting {
                index: 0,
                pledge: OATH_PLEDGES[0]
            }
        );

        for _ in 0..4 {
            assert!(matches!(ceremony.recite(), OathStatus::Reciting { .. }));
        }
        assert_eq!(ceremony.recite(), OathStatus::Sworn);
        assert!(ceremony.is_sworn());
    }

    #[test]
    fn sworn_is_terminal() {
        let mut ceremony = OathCeremony::new();
        for _ in 0..OATH_PLEDGES.len() {
            ceremony.recite();
        }
        assert_eq!(ceremony.recite(), OathStatus::Sworn);
        assert_eq!(ceremony.recited(), OATH_PLEDGES.len());
    }
}

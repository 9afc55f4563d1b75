//! # Card Creation Wizard
//!
//! The three-step "new card" form: details, then media, then category.
//!
//! Each [`CardWizard::advance`] validates only the current step before advancing; going
//! [`back`](CardWizard::back) never validates. [`CardWizard::finish`] hands back a
//! [`CardDraft`], which [`submit_draft`] turns into API calls (creating a new category
//! first when one was requested).

use std::path::PathBuf;

use shared::{Card, CategoryId};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;
use crate::services::api::NewCard;
use crate::utils::validation::validate_name;

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Details,
    Media,
    Category,
}

impl WizardStep {
    /// 1-based index, as shown by the progress bar.
    pub fn number(self) -> usize {
        match self {
            WizardStep::Details => 1,
            WizardStep::Media => 2,
            WizardStep::Category => 3,
        }
    }
}

/// Where the new card goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryChoice {
    Existing(CategoryId),
    New(String),
}

/// Validated wizard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub name: String,
    pub image: PathBuf,
    pub audio: Option<PathBuf>,
    pub category: CategoryChoice,
}

/// Step machine behind the "new card" form.
#[derive(Debug, Clone)]
pub struct CardWizard {
    step: WizardStep,
    require_audio: bool,
    name: String,
    image: Option<PathBuf>,
    audio: Option<PathBuf>,
    category: Option<CategoryChoice>,
}

impl Default for CardWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CardWizard {
    /// Wizard as the app presents it: audio is mandatory.
    pub fn new() -> Self {
        Self {
            step: WizardStep::Details,
            require_audio: true,
            name: String::new(),
            image: None,
            audio: None,
            category: None,
        }
    }

    /// Wizard that lets the card go without audio (the API accepts that).
    pub fn with_optional_audio() -> Self {
        Self {
            require_audio: false,
            ..Self::new()
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_image(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.image = Some(path.into());
        self
    }

    pub fn set_audio(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.audio = Some(path.into());
        self
    }

    pub fn choose_category(&mut self, choice: CategoryChoice) -> &mut Self {
        self.category = Some(choice);
        self
    }

    /// Validate the current step and move forward.
    ///
    /// On the last step this only validates; use [`finish`](Self::finish) to submit.
    pub fn advance(&mut self) -> Result<WizardStep> {
        self.validate_step(self.step)?;
        self.step = match self.step {
            WizardStep::Details => WizardStep::Media,
            WizardStep::Media | WizardStep::Category => WizardStep::Category,
        };
        Ok(self.step)
    }

    /// Move back one step without validating.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Details | WizardStep::Media => WizardStep::Details,
            WizardStep::Category => WizardStep::Media,
        };
        self.step
    }

    /// Validate every step and produce the draft. Only allowed from the last step.
    pub fn finish(&self) -> Result<CardDraft> {
        if self.step != WizardStep::Category {
            return Err(AppError::Validation(format!(
                "Complete step {} before creating the card",
                self.step.number()
            )));
        }
        for step in [WizardStep::Details, WizardStep::Media, WizardStep::Category] {
            self.validate_step(step)?;
        }

        let (Some(image), Some(category)) = (self.image.clone(), self.category.clone()) else {
            // Both are checked by validate_step above
            return Err(AppError::Validation("Card is incomplete".to_string()));
        };

        Ok(CardDraft {
            name: self.name.trim().to_string(),
            image,
            audio: self.audio.clone(),
            category,
        })
    }

    fn validate_step(&self, step: WizardStep) -> Result<()> {
        match step {
            WizardStep::Details => validate_name(&self.name, "card").into_result(),
            WizardStep::Media => {
                if self.image.is_none() {
                    return Err(AppError::Validation("Select an image".to_string()));
                }
                if self.require_audio && self.audio.is_none() {
                    return Err(AppError::Validation("Select or record an audio".to_string()));
                }
                Ok(())
            }
            WizardStep::Category => match &self.category {
                None => Err(AppError::Validation("Choose a category".to_string())),
                Some(CategoryChoice::New(name)) => validate_name(name, "category").into_result(),
                Some(CategoryChoice::Existing(_)) => Ok(()),
            },
        }
    }
}

/// Create the draft's category if it is new, then the card itself.
#[tracing::instrument(skip(api, draft), fields(name = %draft.name))]
pub async fn submit_draft(api: &dyn ApiService, draft: CardDraft) -> Result<Card> {
    let category_id = match draft.category {
        CategoryChoice::Existing(id) => id,
        CategoryChoice::New(name) => api.create_category(&name).await?.id,
    };

    api.create_card(NewCard {
        name: draft.name,
        category_id: Some(category_id),
        image: Some(draft.image),
        audio: draft.audio,
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_step_requires_name() {
        let mut wizard = CardWizard::new();
        assert!(wizard.advance().is_err());
        assert_eq!(wizard.step(), WizardStep::Details);

        wizard.set_name("Água");
        assert_eq!(wizard.advance().unwrap(), WizardStep::Media);
    }

    #[test]
    fn test_media_step_requires_image_and_audio() {
        let mut wizard = CardWizard::new();
        wizard.set_name("Água").advance().unwrap();

        assert!(matches!(wizard.advance(), Err(AppError::Validation(m)) if m == "Select an image"));
        wizard.set_image("agua.jpg");
        assert!(matches!(wizard.advance(), Err(AppError::Validation(m)) if m.contains("audio")));
        wizard.set_audio("agua.m4a");
        assert_eq!(wizard.advance().unwrap(), WizardStep::Category);
    }

    #[test]
    fn test_optional_audio_variant() {
        let mut wizard = CardWizard::with_optional_audio();
        wizard.set_name("Sim").set_image("sim.jpg");
        wizard.advance().unwrap();
        assert_eq!(wizard.advance().unwrap(), WizardStep::Category);
    }

    #[test]
    fn test_back_does_not_validate() {
        let mut wizard = CardWizard::new();
        wizard.set_name("Água").advance().unwrap();
        assert_eq!(wizard.back(), WizardStep::Details);
        assert_eq!(wizard.back(), WizardStep::Details);
    }

    #[test]
    fn test_finish_requires_last_step_and_category() {
        let mut wizard = CardWizard::with_optional_audio();
        wizard.set_name(" Pão ").set_image("pao.jpg");
        assert!(wizard.finish().is_err());

        wizard.advance().unwrap();
        wizard.advance().unwrap();
        assert!(wizard.finish().is_err());

        wizard.choose_category(CategoryChoice::New("  ".to_string()));
        assert!(wizard.finish().is_err());

        wizard.choose_category(CategoryChoice::Existing(CategoryId::from("3")));
        let draft = wizard.finish().unwrap();
        assert_eq!(draft.name, "Pão");
        assert_eq!(draft.image, PathBuf::from("pao.jpg"));
        assert_eq!(draft.audio, None);
        assert_eq!(draft.category, CategoryChoice::Existing(CategoryId::from("3")));
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(WizardStep::Details.number(), 1);
        assert_eq!(WizardStep::Category.number(), 3);
        assert!(WizardStep::Media > WizardStep::Details);
    }
}

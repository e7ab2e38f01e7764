/// Post-reveal satisfaction survey. `ThankYouPositive` and
/// `ThankYouNegative` are absorbing; only a new simulation resets the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStage {
    Idle,
    Prompt,
    Form,
    ThankYouPositive,
    ThankYouNegative,
}

impl FeedbackStage {
    /// Entered right after a successful reveal.
    pub fn begin(self) -> Self {
        match self {
            FeedbackStage::Idle => FeedbackStage::Prompt,
            other => other,
        }
    }

    pub fn choose_positive(self) -> Self {
        match self {
            FeedbackStage::Prompt => FeedbackStage::ThankYouPositive,
            other => other,
        }
    }

    pub fn choose_negative(self) -> Self {
        match self {
            FeedbackStage::Prompt => FeedbackStage::Form,
            other => other,
        }
    }

    pub fn submit_form(self) -> Self {
        match self {
            FeedbackStage::Form => FeedbackStage::ThankYouNegative,
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackReason {
    UnnaturalResult,
    HairNotStraight,
    FaceAltered,
    PhotoQuality,
}

impl FeedbackReason {
    pub const ALL: [FeedbackReason; 4] = [
        FeedbackReason::UnnaturalResult,
        FeedbackReason::HairNotStraight,
        FeedbackReason::FaceAltered,
        FeedbackReason::PhotoQuality,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeedbackReason::UnnaturalResult => "O resultado ficou pouco natural",
            FeedbackReason::HairNotStraight => "O cabelo não ficou liso o suficiente",
            FeedbackReason::FaceAltered => "Meu rosto ou o fundo foi alterado",
            FeedbackReason::PhotoQuality => "A qualidade da imagem ficou ruim",
        }
    }
}

/// Reasons a visitor can tick when the simulation disappointed. None is
/// individually required; the whole checklist may be submitted empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackChecklist {
    pub unnatural_result: bool,
    pub hair_not_straight: bool,
    pub face_altered: bool,
    pub photo_quality: bool,
    pub other: String,
}

impl FeedbackChecklist {
    pub fn toggle(&mut self, reason: FeedbackReason) {
        let flag = self.flag_mut(reason);
        *flag = !*flag;
    }

    pub fn is_set(&self, reason: FeedbackReason) -> bool {
        match reason {
            FeedbackReason::UnnaturalResult => self.unnatural_result,
            FeedbackReason::HairNotStraight => self.hair_not_straight,
            FeedbackReason::FaceAltered => self.face_altered,
            FeedbackReason::PhotoQuality => self.photo_quality,
        }
    }

    fn flag_mut(&mut self, reason: FeedbackReason) -> &mut bool {
        match reason {
            FeedbackReason::UnnaturalResult => &mut self.unnatural_result,
            FeedbackReason::HairNotStraight => &mut self.hair_not_straight,
            FeedbackReason::FaceAltered => &mut self.face_altered,
            FeedbackReason::PhotoQuality => &mut self.photo_quality,
        }
    }

    /// One line for the operator log / future CRM hook.
    pub fn summary(&self) -> String {
        let mut reasons: Vec<&str> = Vec::new();
        if self.unnatural_result {
            reasons.push("resultado pouco natural");
        }
        if self.hair_not_straight {
            reasons.push("cabelo não ficou liso");
        }
        if self.face_altered {
            reasons.push("rosto ou fundo alterado");
        }
        if self.photo_quality {
            reasons.push("qualidade da foto");
        }
        let other = self.other.trim();
        if reasons.is_empty() && other.is_empty() {
            return "sem motivos marcados".to_string();
        }
        let mut line = reasons.join(", ");
        if !other.is_empty() {
            if !line.is_empty() {
                line.push_str("; ");
            }
            line.push_str("outro: ");
            line.push_str(other);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_path_ends_absorbed() {
        let stage = FeedbackStage::Idle.begin().choose_positive();
        assert_eq!(stage, FeedbackStage::ThankYouPositive);
        // Terminal states ignore further choices.
        assert_eq!(stage.choose_negative(), FeedbackStage::ThankYouPositive);
        assert_eq!(stage.submit_form(), FeedbackStage::ThankYouPositive);
    }

    #[test]
    fn negative_path_goes_through_form() {
        let stage = FeedbackStage::Idle.begin().choose_negative();
        assert_eq!(stage, FeedbackStage::Form);
        assert_eq!(stage.submit_form(), FeedbackStage::ThankYouNegative);
    }

    #[test]
    fn empty_checklist_is_submittable() {
        let stage = FeedbackStage::Form.submit_form();
        assert_eq!(stage, FeedbackStage::ThankYouNegative);
        assert_eq!(FeedbackChecklist::default().summary(), "sem motivos marcados");
    }

    #[test]
    fn summary_lists_ticked_reasons_and_free_text() {
        let checklist = FeedbackChecklist {
            unnatural_result: true,
            photo_quality: true,
            other: " ficou escuro ".to_string(),
            ..Default::default()
        };
        let line = checklist.summary();
        assert!(line.contains("resultado pouco natural"));
        assert!(line.contains("qualidade da foto"));
        assert!(line.ends_with("outro: ficou escuro"));
    }

    #[test]
    fn toggle_flips_the_matching_flag() {
        let mut checklist = FeedbackChecklist::default();
        checklist.toggle(FeedbackReason::HairNotStraight);
        assert!(checklist.is_set(FeedbackReason::HairNotStraight));
        assert!(!checklist.is_set(FeedbackReason::FaceAltered));
        checklist.toggle(FeedbackReason::HairNotStraight);
        assert!(!checklist.is_set(FeedbackReason::HairNotStraight));
    }

    #[test]
    fn form_transitions_only_from_prompt() {
        assert_eq!(FeedbackStage::Idle.choose_negative(), FeedbackStage::Idle);
        assert_eq!(FeedbackStage::Idle.submit_form(), FeedbackStage::Idle);
    }
}

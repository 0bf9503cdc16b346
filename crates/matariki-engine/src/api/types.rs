use crate::catalog::Star;

/// Text shown in the star info panel.
#[derive(Debug, Clone, PartialEq)]
pub struct StarInfo {
    pub id: String,
    pub name: String,
    pub meaning: String,
    pub story: String,
    pub cultural: String,
    /// CSS color for the name heading.
    pub color: String,
    pub image: Option<String>,
}

impl StarInfo {
    pub fn from_star(star: &Star) -> Self {
        Self {
            id: star.def.id.clone(),
            name: star.def.name.clone(),
            meaning: star.def.meaning.clone(),
            story: star.def.story.clone(),
            cultural: star.def.cultural.clone(),
            color: star.def.color.clone(),
            image: star.def.image.clone(),
        }
    }

    /// Alt text for the star image.
    pub fn image_alt(&self) -> String {
        format!("{} - {}", self.name, self.meaning)
    }
}

/// Update for the page panels around the canvas, emitted by the game and
/// applied by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// Open the info panel for a star and hide the instructions.
    ShowStarInfo(StarInfo),
    /// Close the info panel and restore the instructions.
    HideStarInfo,
    /// New objective line.
    Objective(String),
    Progress {
        discovered: usize,
        total: usize,
    },
    ShowCompletion,
    HideCompletion,
    /// Enable or disable the hint button.
    HintAvailable(bool),
}

impl PanelEvent {
    /// Progress as "k/N stars discovered".
    pub fn progress_text(discovered: usize, total: usize) -> String {
        format!("{}/{} stars discovered", discovered, total)
    }

    /// Progress bar fill in percent.
    pub fn progress_percent(discovered: usize, total: usize) -> f32 {
        if total == 0 {
            0.0
        } else {
            discovered as f32 / total as f32 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_formatting() {
        assert_eq!(PanelEvent::progress_text(3, 9), "3/9 stars discovered");
        assert_eq!(PanelEvent::progress_percent(0, 0), 0.0);
        assert!((PanelEvent::progress_percent(1, 4) - 25.0).abs() < 1e-6);
    }
}

use crate::theme::Theme;
use crate::utils::*;
use pairflip_core::Difficulty;
use serde::{Deserialize, Serialize};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Player preferences kept across visits. Games themselves are never stored.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub difficulty: Difficulty,
}

impl StorageKey for Settings {
    const KEY: &'static str = "pairflip:settings";
}

fn difficulty_label(difficulty: Difficulty) -> String {
    let (columns, rows) = difficulty.game_config().size;
    match difficulty {
        Difficulty::Easy => format!("Easy ({columns}×{rows})"),
        Difficulty::Hard => format!("Hard ({columns}×{rows})"),
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    pub difficulty: Difficulty,
    pub theme: Theme,
    pub on_difficulty: Callback<Difficulty>,
    pub on_theme: Callback<Theme>,
}

#[function_component]
pub(crate) fn SettingsBar(props: &SettingsProps) -> Html {
    let onchange = {
        let on_difficulty = props.on_difficulty.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_difficulty.emit(Difficulty::parse_or_default(&value));
        })
    };

    html! {
        <div class="settings">
            <label>
                {"Difficulty "}
                <select id="difficulty" {onchange}>
                    {
                        for Difficulty::ALL.into_iter().map(|difficulty| html! {
                            <option value={difficulty.name()} selected={difficulty == props.difficulty}>
                                {difficulty_label(difficulty)}
                            </option>
                        })
                    }
                </select>
            </label>
            <ul class="theme-switcher">
                {
                    for Theme::ALL.into_iter().map(|theme| {
                        let on_theme = props.on_theme.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_theme.emit(theme));
                        html! {
                            <li>
                                <button class={classes!((theme == props.theme).then_some("active"))} {onclick}>
                                    {theme.label()}
                                </button>
                            </li>
                        }
                    })
                }
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_show_board_size() {
        assert_eq!(difficulty_label(Difficulty::Easy), "Easy (4×3)");
        assert_eq!(difficulty_label(Difficulty::Hard), "Hard (6×4)");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());

        let settings: Settings = serde_json::from_str(r#"{"difficulty":"hard"}"#).unwrap();
        assert_eq!(settings.difficulty, Difficulty::Hard);
    }
}

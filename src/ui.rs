use bevy::prelude::*;
use bevy::ui::BackgroundColor;

use crate::state::XrMode;
use crate::xr::{ExitRequested, XrRuntimeHandle, XrSessionKind, XrSessionToggle, XrSettings};

const BUTTON_IDLE: Color = Color::srgba(0.0, 0.0, 0.0, 0.55);
const BUTTON_HOVER: Color = Color::srgba(0.0, 0.0, 0.0, 0.8);
const BUTTON_DISABLED: Color = Color::srgba(0.2, 0.2, 0.2, 0.4);

/// Enter/leave button for one session kind.
#[derive(Component, Clone, Copy)]
pub struct XrSessionButton {
    pub kind: XrSessionKind,
    pub supported: bool,
}

#[derive(Component)]
pub struct XrButtonLabel(pub XrSessionKind);

#[derive(Component)]
pub struct ExitButton;

pub fn button_label(kind: XrSessionKind, supported: bool, mode: XrMode) -> String {
    if !supported {
        format!("{kind} NOT SUPPORTED")
    } else if mode == kind.mode() {
        format!("EXIT {kind}")
    } else {
        format!("ENTER {kind}")
    }
}

pub fn spawn_xr_buttons(
    mut commands: Commands,
    runtime: Res<XrRuntimeHandle>,
    settings: Res<XrSettings>,
) {
    commands
        .spawn((
            // Bottom-centre strip over the full-viewport render
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                bottom: Val::Px(24.0),
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(12.0),
                ..default()
            },
            Name::new("XrButtons"),
        ))
        .with_children(|row| {
            for kind in [XrSessionKind::Vr, XrSessionKind::Ar] {
                let supported = runtime.0.supports(kind);
                row.spawn((
                    Button,
                    XrSessionButton { kind, supported },
                    Name::new(format!("{kind}Button")),
                    BackgroundColor(if supported { BUTTON_IDLE } else { BUTTON_DISABLED }),
                    BorderColor(Color::WHITE),
                    Node {
                        padding: UiRect::axes(Val::Px(18.0), Val::Px(10.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        XrButtonLabel(kind),
                        Text::new(button_label(kind, supported, XrMode::Inactive)),
                        TextFont { font_size: 16.0, ..default() },
                        TextColor(Color::WHITE),
                    ));
                });
            }

            if settings.exit_button {
                row.spawn((
                    Button,
                    ExitButton,
                    Name::new("ExitButton"),
                    BackgroundColor(BUTTON_IDLE),
                    BorderColor(Color::WHITE),
                    Node {
                        padding: UiRect::axes(Val::Px(18.0), Val::Px(10.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                ))
                .with_children(|btn| {
                    btn.spawn((
                        Text::new("EXIT"),
                        TextFont { font_size: 16.0, ..default() },
                        TextColor(Color::WHITE),
                    ));
                });
            }
        });
}

pub fn xr_button_interaction(
    mut q: Query<(&Interaction, &XrSessionButton, &mut BackgroundColor), Changed<Interaction>>,
    mut toggles: EventWriter<XrSessionToggle>,
) {
    for (interaction, button, mut bg) in &mut q {
        // Unsupported buttons stay inert.
        if !button.supported {
            continue;
        }
        match *interaction {
            Interaction::Pressed => {
                toggles.write(XrSessionToggle(button.kind));
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

pub fn exit_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<ExitButton>)>,
    mut exits: EventWriter<ExitRequested>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                exits.write(ExitRequested);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

/// Runs on every `XrMode` change.
pub fn refresh_xr_button_labels(
    mode: Res<State<XrMode>>,
    buttons: Query<&XrSessionButton>,
    mut labels: Query<(&XrButtonLabel, &mut Text)>,
) {
    for (label, mut text) in &mut labels {
        let supported = buttons.iter().any(|b| b.kind == label.0 && b.supported);
        text.0 = button_label(label.0, supported, *mode.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_support_and_mode() {
        assert_eq!(button_label(XrSessionKind::Vr, false, XrMode::Inactive), "VR NOT SUPPORTED");
        assert_eq!(button_label(XrSessionKind::Vr, true, XrMode::Inactive), "ENTER VR");
        assert_eq!(button_label(XrSessionKind::Ar, true, XrMode::Ar), "EXIT AR");
        assert_eq!(button_label(XrSessionKind::Ar, true, XrMode::Vr), "ENTER AR");
    }
}

// Widget tree for every panel plus the theme editor modal

use super::{Choice, Message, Studio};
use crate::catalog::commands::{CommandEntry, ThemeOption, COMMANDS, EXAMPLES, INSTALLATION, VERIFY};
use crate::catalog::components::{categories, ALL_CATEGORIES};
use crate::catalog::reference::{ReferenceGroup, BORDER_GROUPS, SPACING_GROUPS, TYPOGRAPHY_GROUPS};
use crate::controllers::{NumericField, FONT_FAMILIES, FONT_SIZES, FONT_WEIGHTS};
use crate::model::{
    ColorRole, FontSizeStep, RadiusStep, SpacingUnit, Theme as DesignTheme, SPACING_SCALE_MAX,
    SPACING_SCALE_MIN, SPACING_SCALE_STEP,
};
use crate::preview::{render_preview, spacing_preview, swatches, ElementStyle};
use crate::serialize::ExportFormat;
use crate::theme::{
    color_from_hex, css_length_px, swatch_color, COLOR_ERROR, COLOR_INFO, COLOR_MUTED_DARK,
    COLOR_PLACEHOLDER, EXPORT_PREVIEW_HEIGHT, FONT_LG, FONT_MD, FONT_SM, FONT_XL, FONT_XS,
    LIST_HEIGHT, SIDEBAR_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, SWATCH_SIZE,
};
use crate::types::{CliTab, ConfigTab, ManagerTab, Panel, TokenSubmenu};
use iced::widget::{
    button, center, checkbox, column, container, horizontal_rule, horizontal_space, mouse_area,
    opaque, pick_list, row, scrollable, slider, stack, text, text_input, vertical_space, Column,
    Row,
};
use iced::{Alignment, Border, Center, Color, Element, Fill, Font, Shadow, Vector};

fn choices(pairs: &'static [(&'static str, &'static str)]) -> Vec<Choice> {
    pairs
        .iter()
        .map(|&(label, value)| Choice { label, value })
        .collect()
}

fn selected_choice(options: &[Choice], value: &str) -> Option<Choice> {
    options.iter().copied().find(|c| c.value == value)
}

fn category_choice(category: &'static str) -> Choice {
    let label = if category == ALL_CATEGORIES {
        "All Categories"
    } else {
        category
    };
    Choice {
        label,
        value: category,
    }
}

fn swatch<'a>(value: &str, size: f32) -> Element<'a, Message> {
    let fill = swatch_color(value);
    container(horizontal_space())
        .width(size)
        .height(size)
        .style(move |_| container::Style {
            background: Some(fill.into()),
            border: Border {
                radius: 4.0.into(),
                width: 1.0,
                color: COLOR_MUTED_DARK,
            },
            ..container::Style::default()
        })
        .into()
}

// Paints an ElementStyle onto a container; unparseable values fall back to inherited styling
fn styled<'a>(
    content: impl Into<Element<'a, Message>>,
    style: &ElementStyle,
) -> container::Container<'a, Message> {
    let background = style.background.as_deref().and_then(color_from_hex);
    let foreground = style.foreground.as_deref().and_then(color_from_hex);
    let border_color = style.border_color.as_deref().and_then(color_from_hex);
    let radius = style
        .border_radius
        .as_deref()
        .and_then(css_length_px)
        .unwrap_or(0.0);
    container(content).padding(SPACING_MD).style(move |_| container::Style {
        background: background.map(Into::into),
        text_color: foreground,
        border: Border {
            radius: radius.into(),
            width: if border_color.is_some() { 1.0 } else { 0.0 },
            color: border_color.unwrap_or(Color::TRANSPARENT),
        },
        ..container::Style::default()
    })
}

fn tab_button<'a, T: ToString>(label: T, active: bool, message: Message) -> Element<'a, Message> {
    let btn = button(text(label.to_string()).size(FONT_SM)).on_press(message);
    if active {
        btn.style(button::primary).into()
    } else {
        btn.style(button::secondary).into()
    }
}

fn section_title<'a>(title: &'a str) -> Element<'a, Message> {
    column![text(title).size(FONT_LG), horizontal_rule(1)]
        .spacing(SPACING_SM)
        .into()
}

fn labeled_slider<'a>(
    label: &'a str,
    range: std::ops::RangeInclusive<f32>,
    step: f32,
    value: f32,
    display: String,
    field: NumericField,
) -> Element<'a, Message> {
    row![
        text(label).size(FONT_SM).width(160),
        slider(range, value, move |v| Message::NumericChanged(field, v))
            .step(step)
            .width(Fill),
        text(display).size(FONT_SM).width(80),
    ]
    .spacing(SPACING_MD)
    .align_y(Center)
    .into()
}

fn reference_groups<'a>(groups: &'static [ReferenceGroup]) -> Element<'a, Message> {
    let sections = groups.iter().map(|group| {
        let rows = group.tokens.iter().map(|token| {
            row![
                text(token.name).size(FONT_SM).font(Font::MONOSPACE).width(Fill),
                text(token.value).size(FONT_SM).color(COLOR_INFO),
            ]
            .spacing(SPACING_MD)
            .into()
        });
        column![
            section_title(group.title),
            Column::with_children(rows).spacing(SPACING_XS)
        ]
        .spacing(SPACING_SM)
        .into()
    });
    Column::with_children(sections).spacing(SPACING_LG).into()
}

impl Studio {
    // Renders main application view
    pub fn view(&self) -> Element<'_, Message> {
        let body = column![
            self.view_header(),
            vertical_space().height(SPACING_MD),
            scrollable(self.view_panel()).height(Fill),
            self.view_status(),
        ]
        .padding(SPACING_LG)
        .width(Fill);

        let base: Element<'_, Message> = container(row![self.view_sidebar(), body])
            .width(Fill)
            .height(Fill)
            .into();

        match self.manager.dialog.draft() {
            Some(draft) if self.panel == Panel::Themes => self.view_modal(base, draft),
            _ => base,
        }
    }

    fn view_header(&self) -> Element<'_, Message> {
        let theme_label = if self.dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        };
        row![
            text(self.panel.to_string()).size(FONT_XL),
            horizontal_space(),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .align_y(Center)
        .into()
    }

    fn view_sidebar(&self) -> Element<'_, Message> {
        let mut nav = column![
            text("White Label DS").size(FONT_XL),
            text("Design System Framework")
                .size(FONT_SM)
                .color(COLOR_MUTED_DARK),
            vertical_space().height(SPACING_MD),
        ]
        .spacing(SPACING_SM);

        for panel in Panel::ALL {
            let btn = button(text(panel.to_string()).size(FONT_MD))
                .width(Fill)
                .on_press(Message::PanelSelected(panel));
            nav = nav.push(if self.panel == panel {
                btn.style(button::primary)
            } else {
                btn.style(button::text)
            });
            if panel == Panel::Tokens && self.panel == Panel::Tokens {
                for submenu in TokenSubmenu::ALL {
                    let item = button(text(submenu.to_string()).size(FONT_SM))
                        .width(Fill)
                        .on_press(Message::TokenSubmenuSelected(submenu));
                    let item = if self.tokens_panel.submenu == submenu {
                        item.style(button::secondary)
                    } else {
                        item.style(button::text)
                    };
                    nav = nav.push(container(item).padding([0, SPACING_LG]));
                }
            }
        }

        container(nav)
            .padding(SPACING_LG)
            .width(SIDEBAR_WIDTH)
            .height(Fill)
            .style(container::rounded_box)
            .into()
    }

    fn view_panel(&self) -> Element<'_, Message> {
        match self.panel {
            Panel::Configuration => self.view_configuration(),
            Panel::Tokens => self.view_tokens(),
            Panel::Components => self.view_components(),
            Panel::Themes => self.view_themes(),
            Panel::CliGuide => self.view_cli(),
        }
    }

    // --- Configuration ---

    fn view_configuration(&self) -> Element<'_, Message> {
        let config = &self.configuration;
        let tabs = Row::with_children(ConfigTab::ALL.iter().map(|&tab| {
            tab_button(tab, config.tab == tab, Message::ConfigTabSelected(tab))
        }))
        .spacing(SPACING_SM);

        let body = match config.tab {
            ConfigTab::Colors => self.view_config_colors(),
            ConfigTab::Typography => self.view_config_typography(),
            ConfigTab::Spacing => self.view_config_spacing(),
            ConfigTab::Border => self.view_config_border(),
            ConfigTab::Shadow => self.view_config_shadow(),
            ConfigTab::Opacity => self.view_config_opacity(),
        };

        let save_label = if config.is_saved() {
            "Saved!"
        } else {
            "Save Configuration"
        };
        let actions = row![
            checkbox("Dark mode", config.dark_mode).on_toggle(Message::ConfigDarkModeToggled),
            horizontal_space(),
            button("Export Configuration").on_press(Message::ExportConfiguration),
            button(text(save_label))
                .on_press(Message::SaveConfiguration)
                .style(button::success),
        ]
        .spacing(SPACING_MD)
        .align_y(Center);

        column![tabs, horizontal_rule(1), body, horizontal_rule(1), actions]
            .spacing(SPACING_MD)
            .into()
    }

    fn view_config_colors(&self) -> Element<'_, Message> {
        let rows = self
            .tokens
            .palette()
            .iter()
            .enumerate()
            .map(|(i, token)| {
                row![
                    swatch(&token.value, SWATCH_SIZE),
                    text(token.name.as_str()).size(FONT_MD).width(160),
                    text_input("#000000", &token.value)
                        .on_input(move |v| Message::PaletteColorChanged(i, v))
                        .width(200),
                ]
                .spacing(SPACING_MD)
                .align_y(Center)
                .into()
            });
        Column::with_children(rows).spacing(SPACING_SM).into()
    }

    fn view_config_typography(&self) -> Element<'_, Message> {
        let typography = &self.configuration.typography;
        let families = choices(FONT_FAMILIES);
        let weights = choices(FONT_WEIGHTS);
        let sizes: Vec<Choice> = FONT_SIZES
            .iter()
            .map(|&s| Choice { label: s, value: s })
            .collect();
        let family = selected_choice(&families, &typography.font_family);
        let weight = selected_choice(&weights, &typography.font_weight);
        let size = selected_choice(&sizes, &typography.font_size);
        let sample_size = css_length_px(&typography.font_size).unwrap_or(FONT_LG);

        column![
            row![
                text("Font family").size(FONT_SM).width(160),
                pick_list(families, family, Message::FontFamilySelected).width(240),
            ]
            .align_y(Center),
            row![
                text("Base size").size(FONT_SM).width(160),
                pick_list(sizes, size, Message::FontSizeSelected).width(240),
            ]
            .align_y(Center),
            row![
                text("Weight").size(FONT_SM).width(160),
                pick_list(weights, weight, Message::FontWeightSelected).width(240),
            ]
            .align_y(Center),
            vertical_space().height(SPACING_MD),
            text("The quick brown fox jumps over the lazy dog").size(sample_size),
            text(format!(
                "{} / {} / {}",
                typography.font_family, typography.font_size, typography.font_weight
            ))
            .size(FONT_XS)
            .color(COLOR_MUTED_DARK),
        ]
        .spacing(SPACING_MD)
        .into()
    }

    fn view_config_spacing(&self) -> Element<'_, Message> {
        let spacing = &self.configuration.spacing;
        let boxes = spacing_preview(spacing).into_iter().map(|length| {
            let edge = css_length_px(&length).unwrap_or(0.0).max(1.0);
            column![
                container(horizontal_space())
                    .width(edge)
                    .height(edge)
                    .style(container::rounded_box),
                text(length).size(FONT_XS),
            ]
            .spacing(SPACING_XS)
            .align_x(Center)
            .into()
        });

        column![
            row![
                text("Unit").size(FONT_SM).width(160),
                pick_list(
                    SpacingUnit::ALL,
                    Some(spacing.unit),
                    Message::SpacingUnitSelected
                )
                .width(240),
            ]
            .align_y(Center),
            labeled_slider(
                "Scale",
                SPACING_SCALE_MIN..=SPACING_SCALE_MAX,
                SPACING_SCALE_STEP,
                spacing.scale,
                format!("{}", spacing.scale),
                NumericField::SpacingScale,
            ),
            Row::with_children(boxes)
                .spacing(SPACING_LG)
                .align_y(Alignment::End),
        ]
        .spacing(SPACING_MD)
        .into()
    }

    fn view_config_border(&self) -> Element<'_, Message> {
        let border = self.configuration.border;
        let sample = container(text("Border preview").size(FONT_SM))
            .padding(SPACING_LG)
            .style(move |theme: &iced::Theme| container::Style {
                border: Border {
                    radius: (border.radius * 16.0).into(),
                    width: border.width,
                    color: theme.palette().primary,
                },
                ..container::Style::default()
            });

        column![
            labeled_slider(
                "Radius",
                0.0..=2.0,
                0.125,
                border.radius,
                format!("{}rem", border.radius),
                NumericField::BorderRadius,
            ),
            labeled_slider(
                "Width",
                0.0..=8.0,
                1.0,
                border.width,
                format!("{}px", border.width),
                NumericField::BorderWidth,
            ),
            sample,
        ]
        .spacing(SPACING_MD)
        .into()
    }

    fn view_config_shadow(&self) -> Element<'_, Message> {
        let shadow = &self.configuration.shadow;
        let (x, y, blur) = (shadow.offset_x, shadow.offset_y, shadow.blur);
        let color = color_from_hex(&shadow.color).unwrap_or(Color::from_rgba(0.0, 0.0, 0.0, 0.1));
        let sample = container(text("Shadow preview").size(FONT_SM))
            .padding(SPACING_LG)
            .style(move |theme: &iced::Theme| container::Style {
                background: Some(theme.palette().background.into()),
                border: Border {
                    radius: 8.0.into(),
                    ..Border::default()
                },
                shadow: Shadow {
                    color,
                    offset: Vector::new(x, y),
                    blur_radius: blur,
                },
                ..container::Style::default()
            });

        column![
            labeled_slider(
                "Offset X",
                -20.0..=20.0,
                1.0,
                shadow.offset_x,
                format!("{}px", shadow.offset_x),
                NumericField::ShadowOffsetX,
            ),
            labeled_slider(
                "Offset Y",
                -20.0..=20.0,
                1.0,
                shadow.offset_y,
                format!("{}px", shadow.offset_y),
                NumericField::ShadowOffsetY,
            ),
            labeled_slider(
                "Blur",
                0.0..=50.0,
                1.0,
                shadow.blur,
                format!("{}px", shadow.blur),
                NumericField::ShadowBlur,
            ),
            labeled_slider(
                "Spread",
                -10.0..=10.0,
                1.0,
                shadow.spread,
                format!("{}px", shadow.spread),
                NumericField::ShadowSpread,
            ),
            row![
                text("Color").size(FONT_SM).width(160),
                text_input("rgba(0, 0, 0, 0.1)", &shadow.color)
                    .on_input(Message::ShadowColorChanged)
                    .width(240),
            ]
            .align_y(Center),
            text(format!("box-shadow: {};", shadow.to_css()))
                .size(FONT_XS)
                .font(Font::MONOSPACE),
            container(sample).padding(SPACING_LG),
        ]
        .spacing(SPACING_MD)
        .into()
    }

    fn view_config_opacity(&self) -> Element<'_, Message> {
        let opacity = self.configuration.opacity;
        column![
            labeled_slider(
                "Disabled",
                0.0..=1.0,
                0.05,
                opacity.disabled,
                format!("{:.2}", opacity.disabled),
                NumericField::OpacityDisabled,
            ),
            labeled_slider(
                "Overlay",
                0.0..=1.0,
                0.05,
                opacity.overlay,
                format!("{:.2}", opacity.overlay),
                NumericField::OpacityOverlay,
            ),
            text("Disabled element")
                .size(FONT_MD)
                .color(Color {
                    a: opacity.disabled,
                    ..COLOR_PLACEHOLDER
                }),
        ]
        .spacing(SPACING_MD)
        .into()
    }

    // --- Tokens ---

    fn view_tokens(&self) -> Element<'_, Message> {
        match self.tokens_panel.submenu {
            TokenSubmenu::Border => reference_groups(BORDER_GROUPS),
            TokenSubmenu::Types => reference_groups(TYPOGRAPHY_GROUPS),
            TokenSubmenu::Space => reference_groups(SPACING_GROUPS),
            TokenSubmenu::Color => self.view_token_colors(),
        }
    }

    fn view_token_colors(&self) -> Element<'_, Message> {
        let sections = self.tokens.categories().iter().map(|category| {
            let rows = category.colors.iter().map(|token| {
                let (cat, name) = (category.category.clone(), token.name.clone());
                row![
                    swatch(&token.value, SWATCH_SIZE),
                    text(token.name.as_str())
                        .size(FONT_SM)
                        .font(Font::MONOSPACE)
                        .width(Fill),
                    text_input("#000000", &token.value)
                        .on_input(move |v| Message::TokenColorChanged(cat.clone(), name.clone(), v))
                        .width(200),
                ]
                .spacing(SPACING_MD)
                .align_y(Center)
                .into()
            });
            column![
                section_title(&category.category),
                Column::with_children(rows).spacing(SPACING_XS)
            ]
            .spacing(SPACING_SM)
            .into()
        });
        Column::with_children(sections).spacing(SPACING_LG).into()
    }

    // --- Components ---

    fn view_components(&self) -> Element<'_, Message> {
        let options: Vec<Choice> = categories().into_iter().map(category_choice).collect();
        let filters = row![
            text_input("Search components...", &self.components.query)
                .on_input(Message::ComponentQueryChanged)
                .width(Fill),
            pick_list(
                options,
                Some(category_choice(self.components.category)),
                Message::ComponentCategorySelected
            )
            .width(200),
        ]
        .spacing(SPACING_MD);

        let visible = self.components.visible();
        let cards: Vec<Element<'_, Message>> = visible
            .iter()
            .map(|entry| {
                let copy_label = if self.components.is_copied(entry.id) {
                    "Copied!"
                } else {
                    "Copy Code"
                };
                container(
                    column![
                        row![
                            text(entry.name).size(FONT_LG),
                            text(entry.category).size(FONT_XS).color(COLOR_INFO),
                            horizontal_space(),
                            button(text(copy_label).size(FONT_SM))
                                .on_press(Message::CopyComponentCode(entry.id)),
                        ]
                        .spacing(SPACING_MD)
                        .align_y(Center),
                        text(entry.description).size(FONT_SM).color(COLOR_MUTED_DARK),
                        container(text(entry.code).size(FONT_XS).font(Font::MONOSPACE))
                            .padding(SPACING_MD)
                            .width(Fill)
                            .style(container::rounded_box),
                    ]
                    .spacing(SPACING_SM),
                )
                .padding(SPACING_MD)
                .style(container::bordered_box)
                .into()
            })
            .collect();

        let list: Element<'_, Message> = if cards.is_empty() {
            text("No components match your search.").size(FONT_SM).into()
        } else {
            Column::with_children(cards).spacing(SPACING_MD).into()
        };

        column![filters, list].spacing(SPACING_MD).into()
    }

    // --- Theme manager ---

    fn view_themes(&self) -> Element<'_, Message> {
        let tabs = row![
            tab_button(
                ManagerTab::Themes,
                self.manager.tab == ManagerTab::Themes,
                Message::ManagerTabSelected(ManagerTab::Themes)
            ),
            tab_button(
                ManagerTab::Export,
                self.manager.tab == ManagerTab::Export,
                Message::ManagerTabSelected(ManagerTab::Export)
            ),
            horizontal_space(),
            button("Import (Ctrl+O)").on_press(Message::ImportTheme),
            button("New Theme (Ctrl+N)")
                .on_press(Message::CreateTheme)
                .style(button::success),
        ]
        .spacing(SPACING_SM)
        .align_y(Center);

        let body = match self.manager.tab {
            ManagerTab::Themes => row![self.view_theme_list(), self.view_theme_preview()]
                .spacing(SPACING_LG)
                .into(),
            ManagerTab::Export => self.view_export(),
        };

        column![tabs, horizontal_rule(1), body]
            .spacing(SPACING_MD)
            .into()
    }

    fn view_theme_list(&self) -> Element<'_, Message> {
        let selected_id = self.themes.selected().id.as_str();
        let can_delete = self.manager.can_delete(&self.themes);
        let items = self.themes.list().iter().map(|theme| {
            let strip = Row::with_children(
                swatches(theme)
                    .into_iter()
                    .map(|(_, value)| swatch(value, 14.0)),
            )
            .spacing(SPACING_XS);
            let select = button(
                column![
                    text(theme.name.as_str()).size(FONT_MD),
                    text(theme.description.as_str())
                        .size(FONT_XS)
                        .color(COLOR_MUTED_DARK),
                    strip,
                ]
                .spacing(SPACING_XS),
            )
            .width(Fill)
            .on_press(Message::ThemeSelected(theme.id.clone()));
            let select = if theme.id == selected_id {
                select.style(button::primary)
            } else {
                select.style(button::secondary)
            };
            let delete = button(text("Delete").size(FONT_SM)).style(button::danger);
            let delete = if can_delete {
                delete.on_press(Message::DeleteTheme(theme.id.clone()))
            } else {
                delete
            };
            row![
                select,
                column![
                    button(text("Edit").size(FONT_SM))
                        .on_press(Message::EditTheme(theme.id.clone())),
                    delete,
                ]
                .spacing(SPACING_XS),
            ]
            .spacing(SPACING_SM)
            .align_y(Center)
            .into()
        });

        column![
            text("Themes").size(FONT_LG),
            scrollable(Column::with_children(items).spacing(SPACING_SM)).height(LIST_HEIGHT),
        ]
        .spacing(SPACING_MD)
        .width(Fill)
        .into()
    }

    fn view_theme_preview(&self) -> Element<'_, Message> {
        let theme = self.themes.selected();
        let styles = render_preview(theme, self.manager.preview_dark_mode);

        let heading = styled(
            column![
                text(theme.name.as_str()).size(FONT_XL),
                text(theme.typography.font_family.as_str()).size(FONT_XS),
            ],
            &styles.heading,
        );
        let buttons = row![
            styled(text("Primary").size(FONT_SM), &styles.primary_button),
            styled(text("Secondary").size(FONT_SM), &styles.secondary_button),
        ]
        .spacing(SPACING_SM);
        let muted = styled(
            text("Muted surface with border").size(FONT_SM),
            &styles.muted_panel,
        )
        .width(Fill);
        let accent = styled(text("Accent highlight").size(FONT_SM), &styles.accent_panel)
            .width(Fill);
        let surface = styled(
            column![heading, buttons, muted, accent].spacing(SPACING_MD),
            &styles.surface,
        )
        .width(Fill)
        .padding(SPACING_LG);

        let palette = Column::with_children(swatches(theme).into_iter().map(|(role, value)| {
            row![
                swatch(value, 20.0),
                text(role.to_string()).size(FONT_SM).width(120),
                text(value.to_string()).size(FONT_XS).font(Font::MONOSPACE),
            ]
            .spacing(SPACING_SM)
            .align_y(Center)
            .into()
        }))
        .spacing(SPACING_XS);

        column![
            row![
                text("Preview").size(FONT_LG),
                horizontal_space(),
                checkbox("Dark preview", self.manager.preview_dark_mode)
                    .on_toggle(|_| Message::TogglePreviewDarkMode),
            ]
            .align_y(Center),
            surface,
            palette,
        ]
        .spacing(SPACING_MD)
        .width(Fill)
        .into()
    }

    fn view_export(&self) -> Element<'_, Message> {
        let actions = row![
            text(format!("Selected: {}", self.themes.selected().name)).size(FONT_MD),
            horizontal_space(),
            button("Export JSON (Ctrl+E)").on_press(Message::ExportTheme(ExportFormat::Json)),
            button("Export CSS").on_press(Message::ExportTheme(ExportFormat::Css)),
            button("Copy").on_press(Message::CopyExportPreview),
        ]
        .spacing(SPACING_SM)
        .align_y(Center);

        let preview: Element<'_, Message> = if self.manager.export_preview.is_empty() {
            text("Export a theme to preview its contents here.")
                .size(FONT_SM)
                .color(COLOR_MUTED_DARK)
                .into()
        } else {
            scrollable(
                container(
                    text(self.manager.export_preview.as_str())
                        .size(FONT_XS)
                        .font(Font::MONOSPACE),
                )
                .padding(SPACING_MD)
                .width(Fill),
            )
            .height(EXPORT_PREVIEW_HEIGHT)
            .into()
        };

        column![actions, container(preview).style(container::rounded_box)]
            .spacing(SPACING_MD)
            .into()
    }

    fn view_modal<'a>(
        &'a self,
        base: Element<'a, Message>,
        draft: &'a DesignTheme,
    ) -> Element<'a, Message> {
        let title = self.manager.dialog.title().unwrap_or_default();

        let colors = ColorRole::ALL.iter().map(|&role| {
            let value = draft.colors.get(role);
            row![
                swatch(value, 20.0),
                text(role.to_string()).size(FONT_SM).width(100),
                text_input("#000000", value)
                    .on_input(move |v| Message::DraftColorChanged(role, v))
                    .width(Fill),
            ]
            .spacing(SPACING_SM)
            .align_y(Center)
            .into()
        });
        let sizes = FontSizeStep::ALL.iter().map(|&step| {
            row![
                text(step.key()).size(FONT_SM).width(60),
                text_input("1rem", draft.typography.font_size.get(step))
                    .on_input(move |v| Message::DraftFontSizeChanged(step, v))
                    .width(Fill),
            ]
            .spacing(SPACING_SM)
            .align_y(Center)
            .into()
        });
        let radii = RadiusStep::ALL.iter().map(|&step| {
            row![
                text(step.key()).size(FONT_SM).width(60),
                text_input("0.25rem", draft.border_radius.get(step))
                    .on_input(move |v| Message::DraftRadiusChanged(step, v))
                    .width(Fill),
            ]
            .spacing(SPACING_SM)
            .align_y(Center)
            .into()
        });

        let form = column![
            text(title).size(FONT_XL),
            text("Name").size(FONT_SM),
            text_input("Theme name", &draft.name).on_input(Message::DraftNameChanged),
            text("Description").size(FONT_SM),
            text_input("Description", &draft.description)
                .on_input(Message::DraftDescriptionChanged),
            section_title("Colors"),
            Column::with_children(colors).spacing(SPACING_XS),
            section_title("Typography"),
            text_input("Font family", &draft.typography.font_family)
                .on_input(Message::DraftFontFamilyChanged),
            Column::with_children(sizes).spacing(SPACING_XS),
            section_title("Border Radius"),
            Column::with_children(radii).spacing(SPACING_XS),
            row![
                horizontal_space(),
                button("Cancel (Esc)")
                    .on_press(Message::CancelDraft)
                    .style(button::secondary),
                button("Save Theme")
                    .on_press(Message::SaveDraft)
                    .style(button::success),
            ]
            .spacing(SPACING_SM),
        ]
        .spacing(SPACING_SM);

        let dialog = container(scrollable(form).height(EXPORT_PREVIEW_HEIGHT * 1.5))
            .width(520)
            .padding(SPACING_LG)
            .style(container::rounded_box);

        stack![
            base,
            opaque(
                mouse_area(center(opaque(dialog)).style(|_| container::Style {
                    background: Some(
                        Color {
                            a: 0.7,
                            ..Color::BLACK
                        }
                        .into()
                    ),
                    ..container::Style::default()
                }))
                .on_press(Message::CancelDraft)
            )
        ]
        .into()
    }

    // --- CLI guide ---

    fn view_cli(&self) -> Element<'_, Message> {
        let tabs = Row::with_children(CliTab::ALL.iter().map(|&tab| {
            tab_button(tab, self.cli.tab == tab, Message::CliTabSelected(tab))
        }))
        .spacing(SPACING_SM);

        let body: Element<'_, Message> = match self.cli.tab {
            CliTab::Installation => column![
                self.view_command_list("Install", INSTALLATION),
                self.view_command_list("Verify", VERIFY),
            ]
            .spacing(SPACING_LG)
            .into(),
            CliTab::Commands => self.view_command_list("Available Commands", COMMANDS),
            CliTab::Builder => self.view_command_builder(),
            CliTab::Examples => self.view_command_list("Examples", EXAMPLES),
        };

        column![tabs, horizontal_rule(1), body]
            .spacing(SPACING_MD)
            .into()
    }

    fn view_command_row<'a>(&self, command: String, description: &'a str) -> Element<'a, Message> {
        let copy_label = if self.cli.is_copied(&command) {
            "Copied!"
        } else {
            "Copy"
        };
        container(
            row![
                column![
                    text(command.clone()).size(FONT_SM).font(Font::MONOSPACE),
                    text(description).size(FONT_XS).color(COLOR_MUTED_DARK),
                ]
                .spacing(SPACING_XS)
                .width(Fill),
                button(text(copy_label).size(FONT_SM)).on_press(Message::CopyCommand(command)),
            ]
            .spacing(SPACING_MD)
            .align_y(Center),
        )
        .padding(SPACING_MD)
        .style(container::rounded_box)
        .into()
    }

    fn view_command_list(
        &self,
        title: &'static str,
        entries: &'static [CommandEntry],
    ) -> Element<'_, Message> {
        let rows = entries
            .iter()
            .map(|entry| self.view_command_row(entry.command.to_string(), entry.description));
        column![
            section_title(title),
            Column::with_children(rows).spacing(SPACING_SM)
        ]
        .spacing(SPACING_SM)
        .into()
    }

    fn view_command_builder(&self) -> Element<'_, Message> {
        column![
            row![
                text("Project name").size(FONT_SM).width(160),
                text_input("my-white-label-app", &self.cli.project_name)
                    .on_input(Message::ProjectNameChanged)
                    .width(300),
            ]
            .align_y(Center),
            row![
                text("Theme").size(FONT_SM).width(160),
                pick_list(
                    ThemeOption::ALL,
                    Some(self.cli.theme),
                    Message::CliThemeSelected
                )
                .width(300),
            ]
            .align_y(Center),
            self.view_command_row(self.cli.built_command(), "Generated command"),
        ]
        .spacing(SPACING_MD)
        .into()
    }

    fn view_status(&self) -> Element<'_, Message> {
        let color = if self.is_error {
            COLOR_ERROR
        } else {
            COLOR_MUTED_DARK
        };
        container(
            text(self.status_message.as_deref().unwrap_or("Ready"))
                .size(FONT_SM)
                .color(color),
        )
        .padding(SPACING_MD)
        .width(Fill)
        .into()
    }
}

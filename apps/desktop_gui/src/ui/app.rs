use chrono::{Datelike, Local};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use catalog::{tag_vocabulary, visible_projects, CatalogState, SortMode};
use contact::delivery::DeliveryRoute;
use contact::draft::ContactDraft;
use contact::status::{SubmissionState, SubmissionStatus};
use content::domain::{Content, Project, TimelineEntry};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{StatusBanner, StatusBannerSeverity, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

const PAGE_MAX_WIDTH: f32 = 880.0;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(88, 101, 242);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub content: Content,
    pub route: DeliveryRoute,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            content: Content::sample(),
            route: DeliveryRoute::Mailto,
        }
    }
}

pub struct PortfolioApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    content: Content,
    route: DeliveryRoute,

    tags: Vec<String>,
    catalog: CatalogState,

    draft: ContactDraft,
    submission: SubmissionStatus,

    status: String,
    status_banner: Option<StatusBanner>,
}

impl PortfolioApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let StartupConfig { content, route } = startup;
        let tags = tag_vocabulary(&content.projects);

        Self {
            cmd_tx,
            ui_rx,
            content,
            route,
            tags,
            catalog: CatalogState::default(),
            draft: ContactDraft::default(),
            submission: SubmissionStatus::idle(),
            status: String::new(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(text) => {
                    tracing::debug!(status = %text, "worker status");
                    self.status = text;
                }
                UiEvent::WorkerFailed { detail } => {
                    tracing::error!("delivery worker failed: {detail}");
                    self.status_banner = Some(StatusBanner::error(format!(
                        "Delivery worker failed: {detail}"
                    )));
                    if self.submission.is_sending() {
                        self.submission = SubmissionStatus::idle();
                    }
                }
                UiEvent::ContactDelivered => {
                    if self.submission.is_sending() {
                        self.submission = SubmissionStatus::sent();
                        self.draft.clear();
                    } else {
                        tracing::debug!("ignoring stale delivery confirmation");
                    }
                }
                UiEvent::ContactFailed { detail } => {
                    tracing::warn!("contact delivery failed: {detail}");
                    if self.submission.is_sending() {
                        self.submission = SubmissionStatus::delivery_failed();
                    }
                }
            }
        }
    }

    /// Runs the submission state machine for the current draft. Re-entry
    /// while a request is in flight is rejected here, not just by the
    /// disabled button.
    fn submit_contact(&mut self, ctx: &egui::Context) {
        if self.submission.is_sending() {
            return;
        }

        let message = match self.draft.validate() {
            Ok(message) => message,
            Err(_) => {
                self.submission = SubmissionStatus::validation_failed();
                return;
            }
        };

        match &self.route {
            DeliveryRoute::Remote(endpoint) => {
                self.submission = SubmissionStatus::sending();
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::SubmitContact {
                        endpoint: endpoint.clone(),
                        message,
                    },
                    &mut self.status_banner,
                );
                if !queued {
                    self.submission = SubmissionStatus::idle();
                }
            }
            DeliveryRoute::Mailto => {
                // Hand the message to the mail client; the outcome is not
                // observable, so the status stays idle and the draft is kept.
                self.open_link(ctx, message.mailto_link(&self.content.profile.email));
                self.submission = SubmissionStatus::idle();
            }
        }
    }

    fn open_link(&self, ctx: &egui::Context, url: impl Into<String>) {
        ctx.open_url(egui::OpenUrl::new_tab(url.into()));
    }

    fn link_button(&self, ui: &mut egui::Ui, ctx: &egui::Context, label: &str, url: &str) {
        ui.add_enabled_ui(!url.is_empty(), |ui| {
            if ui.button(label).clicked() {
                self.open_link(ctx, url.to_string());
            }
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
            ui.add_space(8.0);
        }
    }

    fn show_top_bar(&self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(self.content.profile.name.as_str())
                    .strong()
                    .size(16.0),
            );
            ui.weak(self.content.profile.headline.as_str());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if !self.content.profile.cv_url.is_empty() && ui.button("Download CV").clicked() {
                    self.open_link(ctx, self.content.profile.cv_url.clone());
                }
                if !self.status.is_empty() {
                    ui.weak(egui::RichText::new(self.status.as_str()).size(11.0));
                }
            });
        });
        ui.add_space(4.0);
    }

    fn show_hero(&self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let profile = &self.content.profile;

        let gap = 16.0;
        let left_width = (ui.available_width() - gap) * 0.58;
        let right_width = ui.available_width() - gap - left_width;

        ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
            ui.vertical(|ui| {
                ui.set_width(left_width);
                ui.label(
                    egui::RichText::new(profile.headline.as_str())
                        .strong()
                        .size(26.0),
                );
                ui.add_space(8.0);
                ui.label(profile.about.as_str());
                ui.add_space(10.0);
                ui.horizontal_wrapped(|ui| {
                    self.link_button(ui, ctx, "GitHub", &profile.github_url);
                    self.link_button(ui, ctx, "LinkedIn", &profile.linkedin_url);
                });
            });

            ui.add_space(gap);

            ui.vertical(|ui| {
                ui.set_width(right_width);
                card_frame(ui).show(ui, |ui| {
                    ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                egui::RichText::new(profile.name.as_str()).strong().size(16.0),
                            );
                            ui.add_space(4.0);
                            if !profile.location.is_empty() {
                                detail_row(ui, "Location", &profile.location);
                            }
                            detail_row(ui, "Email", &profile.email);
                            if !profile.phone.is_empty() {
                                detail_row(ui, "Phone", &profile.phone);
                            }
                        });
                        // Stands in for the profile photo.
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            monogram_block(ui, 72.0, &monogram(&profile.name));
                        });
                    });
                    ui.add_space(8.0);
                    self.link_button(ui, ctx, "Download CV", &profile.cv_url);
                });
            });
        });
    }

    fn show_skills(&self, ui: &mut egui::Ui) {
        if self.content.skills.is_empty() {
            return;
        }

        section_heading(ui, "Skills");

        let gap = 12.0;
        for row in self.content.skills.chunks(3) {
            let width =
                (ui.available_width() - gap * row.len().saturating_sub(1) as f32) / row.len() as f32;
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
                for (index, group) in row.iter().enumerate() {
                    if index > 0 {
                        ui.add_space(gap);
                    }
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        card_frame(ui).show(ui, |ui| {
                            ui.label(egui::RichText::new(group.title.as_str()).strong().size(15.0));
                            ui.add_space(4.0);
                            ui.horizontal_wrapped(|ui| {
                                for item in &group.items {
                                    chip(ui, item.as_str());
                                }
                            });
                        });
                    });
                }
            });
            ui.add_space(8.0);
        }
    }

    fn show_projects(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        section_heading(ui, "Projects");

        let mut clicked_tag: Option<String> = None;
        ui.horizontal_wrapped(|ui| {
            for tag in &self.tags {
                let selected = self.catalog.selected_tag == *tag;
                if ui.selectable_label(selected, tag.as_str()).clicked() {
                    clicked_tag = Some(tag.clone());
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::ComboBox::from_id_salt("project_sort")
                    .selected_text(self.catalog.sort.label())
                    .show_ui(ui, |ui| {
                        for mode in SortMode::ALL {
                            ui.selectable_value(&mut self.catalog.sort, mode, mode.label());
                        }
                    });
                ui.weak("Sort");
            });
        });
        if let Some(tag) = clicked_tag {
            self.catalog.select_tag(&tag);
        }

        ui.add_space(8.0);

        let visible = visible_projects(&self.content.projects, &self.catalog);
        if visible.is_empty() {
            ui.add_space(12.0);
            ui.label(egui::RichText::new("No projects match this tag.").italics());
            ui.add_space(12.0);
            return;
        }

        let gap = 12.0;
        let width = (ui.available_width() - gap) / 2.0;
        for pair in visible.chunks(2) {
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
                for (index, project) in pair.iter().enumerate() {
                    if index > 0 {
                        ui.add_space(gap);
                    }
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        self.show_project_card(ui, ctx, project);
                    });
                }
            });
            ui.add_space(8.0);
        }
    }

    fn show_project_card(&self, ui: &mut egui::Ui, ctx: &egui::Context, project: &Project) {
        card_frame(ui).show(ui, |ui| {
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
                // Thumbnail stand-in; no image assets are loaded.
                monogram_block(ui, 52.0, &monogram(&project.name));
                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(project.name.as_str()).strong().size(16.0));
                    ui.label(project.one_liner.as_str());
                });
            });

            ui.add_space(6.0);
            if !project.tech_stack.is_empty() {
                ui.weak(egui::RichText::new("Tech stack").size(11.0));
                ui.horizontal_wrapped(|ui| {
                    for item in &project.tech_stack {
                        chip(ui, item.as_str());
                    }
                });
            }
            if !project.tags.is_empty() {
                ui.weak(egui::RichText::new("Tags").size(11.0));
                ui.horizontal_wrapped(|ui| {
                    for tag in &project.tags {
                        chip(ui, tag.as_str());
                    }
                });
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                self.link_button(ui, ctx, "Repo", &project.repo_url);
                self.link_button(ui, ctx, "Live Demo", &project.live_url);
            });
        });
    }

    fn show_timeline(&self, ui: &mut egui::Ui) {
        if self.content.timeline.is_empty() {
            return;
        }

        section_heading(ui, "Education & Experience");

        let education: Vec<&TimelineEntry> = self.content.education().collect();
        let experience: Vec<&TimelineEntry> = self.content.experience().collect();

        let gap = 16.0;
        let width = (ui.available_width() - gap) / 2.0;
        ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
            ui.vertical(|ui| {
                ui.set_width(width);
                timeline_column(ui, "Education", &education);
            });
            ui.add_space(gap);
            ui.vertical(|ui| {
                ui.set_width(width);
                timeline_column(ui, "Experience", &experience);
            });
        });
    }

    fn show_contact(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        section_heading(ui, "Contact");

        let gap = 16.0;
        let form_width = (ui.available_width() - gap) * 0.58;
        let details_width = ui.available_width() - gap - form_width;

        ui.with_layout(egui::Layout::left_to_right(egui::Align::Min), |ui| {
            ui.vertical(|ui| {
                ui.set_width(form_width);
                card_frame(ui).show(ui, |ui| {
                    labeled_text_field(ui, "contact_name", "Name", "Your name", &mut self.draft.name);
                    labeled_text_field(
                        ui,
                        "contact_email",
                        "Email *",
                        "you@example.com",
                        &mut self.draft.email,
                    );
                    labeled_text_field(
                        ui,
                        "contact_subject",
                        "Subject",
                        "What is this about?",
                        &mut self.draft.subject,
                    );

                    ui.label(egui::RichText::new("Message *").strong());
                    ui.add_sized(
                        [ui.available_width(), 120.0],
                        egui::TextEdit::multiline(&mut self.draft.message)
                            .id_salt("contact_message")
                            .hint_text(
                                egui::RichText::new("How can I help?")
                                    .color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
                            ),
                    );

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_enabled_ui(!self.submission.is_sending(), |ui| {
                            if ui
                                .add_sized([130.0, 30.0], egui::Button::new("Send message"))
                                .clicked()
                            {
                                self.submit_contact(ctx);
                            }
                        });
                        if ui.button("Email directly").clicked() {
                            self.open_link(ctx, format!("mailto:{}", self.content.profile.email));
                        }
                    });

                    self.show_submission_status(ui);
                });
            });

            ui.add_space(gap);

            ui.vertical(|ui| {
                ui.set_width(details_width);
                self.show_quick_details(ui, ctx);
            });
        });
    }

    fn show_submission_status(&self, ui: &mut egui::Ui) {
        if self.submission.message.is_empty() {
            return;
        }

        let (fill, stroke) = if self.submission.is_error() {
            (
                egui::Color32::from_rgb(111, 53, 53),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
            )
        } else if self.submission.state == SubmissionState::Sent {
            (
                egui::Color32::from_rgb(47, 92, 63),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 175, 118)),
            )
        } else {
            (
                egui::Color32::from_rgb(58, 60, 66),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(110, 114, 125)),
            )
        };

        ui.add_space(8.0);
        egui::Frame::NONE
            .fill(fill)
            .stroke(stroke)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(self.submission.message.as_str())
                        .color(egui::Color32::WHITE),
                );
            });
    }

    fn show_quick_details(&self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let profile = &self.content.profile;

        card_frame(ui).show(ui, |ui| {
            ui.label(egui::RichText::new("Quick details").strong().size(15.0));
            ui.add_space(4.0);

            detail_row(ui, "Email", &profile.email);
            if !profile.phone.is_empty() {
                detail_row(ui, "Phone", &profile.phone);
            }
            if !profile.location.is_empty() {
                detail_row(ui, "Location", &profile.location);
            }

            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                self.link_button(ui, ctx, "GitHub", &profile.github_url);
                self.link_button(ui, ctx, "LinkedIn", &profile.linkedin_url);
                self.link_button(ui, ctx, "Download CV", &profile.cv_url);
            });
        });
    }

    fn show_footer(&self, ui: &mut egui::Ui) {
        ui.add_space(18.0);
        ui.separator();
        ui.add_space(6.0);
        ui.weak(format!(
            "© {} {}",
            Local::now().year(),
            self.content.profile.name
        ));
        ui.add_space(12.0);
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| self.show_top_bar(ui, ctx));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("page_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_width(ui.available_width().min(PAGE_MAX_WIDTH));
                        ui.add_space(10.0);
                        self.show_status_banner(ui);
                        self.show_hero(ui, ctx);
                        self.show_skills(ui);
                        self.show_projects(ui, ctx);
                        self.show_timeline(ui);
                        self.show_contact(ui, ctx);
                        self.show_footer(ui);
                    });
                });
        });

        if self.submission.is_sending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(14, 12))
}

fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(18.0);
    ui.label(egui::RichText::new(title).strong().size(20.0));
    ui.separator();
    ui.add_space(6.0);
}

fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::NONE
        .fill(ui.visuals().faint_bg_color)
        .stroke(egui::Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0));
        });
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.weak(label);
        ui.label(value);
    });
}

fn timeline_column(ui: &mut egui::Ui, title: &str, entries: &[&TimelineEntry]) {
    ui.label(egui::RichText::new(title).strong().size(16.0));
    ui.add_space(6.0);

    if entries.is_empty() {
        ui.weak("Nothing listed yet.");
        return;
    }

    for entry in entries {
        card_frame(ui).show(ui, |ui| {
            ui.weak(entry.date.as_str());
            ui.label(egui::RichText::new(entry.title.as_str()).strong());
            ui.label(entry.org.as_str());
            for detail in &entry.details {
                ui.weak(format!("- {detail}"));
            }
        });
        ui.add_space(8.0);
    }
}

fn labeled_text_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    hint: &str,
    value: &mut String,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let edit = egui::TextEdit::singleline(value)
        .id_salt(id)
        .hint_text(
            egui::RichText::new(hint).color(ui.visuals().weak_text_color().gamma_multiply(0.85)),
        )
        .desired_width(f32::INFINITY);

    let response = ui.add_sized([ui.available_width(), 30.0], edit);
    ui.add_space(4.0);
    response
}

fn monogram(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn monogram_block(ui: &mut egui::Ui, size: f32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(8), ACCENT);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(size * 0.38),
        egui::Color32::WHITE,
    );
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;

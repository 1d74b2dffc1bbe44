//! Icon resolution for the closed icon set.
//!
//! Every icon a platform or menu entry may carry is a [`MenuIcon`] variant;
//! `IconSet` resolves each variant at runtime based on `IconMode` with a
//! total match, so there is no "missing icon" case.
//! - `IconMode::Unicode` — safe characters that work in all terminals
//! - `IconMode::NerdFonts` — rich Nerd Font glyphs (requires Nerd Font installed)

use kesi_app::IconMode;
use kesi_core::MenuIcon;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a menu or platform icon.
    pub fn menu_icon(&self, icon: MenuIcon) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => match icon {
                MenuIcon::Dashboard => "\u{f0e4}",   // nf-fa-dashboard
                MenuIcon::Box => "\u{f187}",         // nf-fa-archive
                MenuIcon::Cpu => "\u{f2db}",         // nf-fa-microchip
                MenuIcon::Settings => "\u{f013}",    // nf-fa-cog
                MenuIcon::Alert => "\u{f071}",       // nf-fa-warning
                MenuIcon::LineChart => "\u{f201}",   // nf-fa-line_chart
                MenuIcon::FileText => "\u{f15c}",    // nf-fa-file_text
                MenuIcon::Cloud => "\u{f0c2}",       // nf-fa-cloud
                MenuIcon::Database => "\u{f1c0}",    // nf-fa-database
                MenuIcon::BarChart => "\u{f080}",    // nf-fa-bar_chart
                MenuIcon::Image => "\u{f03e}",       // nf-fa-image
                MenuIcon::Workflow => "\u{f0e8}",    // nf-fa-sitemap
                MenuIcon::Spreadsheet => "\u{f1c3}", // nf-fa-file_excel
                MenuIcon::Code => "\u{f121}",        // nf-fa-code
                MenuIcon::Camera => "\u{f030}",      // nf-fa-camera
                MenuIcon::Radio => "\u{f012}",       // nf-fa-signal
                MenuIcon::Wand => "\u{f0d0}",        // nf-fa-magic
                MenuIcon::Monitor => "\u{f108}",     // nf-fa-desktop
                MenuIcon::Folder => "\u{f07b}",      // nf-fa-folder
                MenuIcon::Edit => "\u{f044}",        // nf-fa-edit
                MenuIcon::Layers => "\u{f5fd}",      // nf-mdi-layers
                MenuIcon::Copy => "\u{f0c5}",        // nf-fa-copy
                MenuIcon::Bot => "\u{f544}",         // nf-fa-robot
                MenuIcon::Brain => "\u{f5dc}",       // nf-fa-brain
                MenuIcon::Book => "\u{f02d}",        // nf-fa-book
                MenuIcon::Briefcase => "\u{f0b1}",   // nf-fa-briefcase
                MenuIcon::Video => "\u{f03d}",       // nf-fa-video_camera
                MenuIcon::Plane => "\u{f072}",       // nf-fa-plane
            },
            IconMode::Unicode => match icon {
                MenuIcon::Dashboard => "\u{25a6}", // ▦
                MenuIcon::Box => "\u{25eb}",       // ◫
                MenuIcon::Cpu => "[C]",
                MenuIcon::Settings => "\u{2699}", // ⚙
                MenuIcon::Alert => "\u{26a0}",    // ⚠
                MenuIcon::LineChart => "\u{2197}", // ↗
                MenuIcon::FileText => "\u{2263}", // ≣
                MenuIcon::Cloud => "\u{2601}",    // ☁
                MenuIcon::Database => "\u{26c1}", // ⛁
                MenuIcon::BarChart => "\u{25a4}", // ▤
                MenuIcon::Image => "\u{25a8}",    // ▨
                MenuIcon::Workflow => "\u{21c4}", // ⇄
                MenuIcon::Spreadsheet => "\u{25a7}", // ▧
                MenuIcon::Code => "<>",
                MenuIcon::Camera => "\u{25c9}", // ◉
                MenuIcon::Radio => "\u{2301}",  // ⌁
                MenuIcon::Wand => "\u{2726}",   // ✦
                MenuIcon::Monitor => "[D]",
                MenuIcon::Folder => "\u{25ab}", // ▫
                MenuIcon::Edit => "\u{270e}",   // ✎
                MenuIcon::Layers => "\u{2261}", // ≡
                MenuIcon::Copy => "\u{29c9}",   // ⧉
                MenuIcon::Bot => "\u{25c8}",    // ◈
                MenuIcon::Brain => "\u{2733}",  // ✳
                MenuIcon::Book => "\u{25ad}",   // ▭
                MenuIcon::Briefcase => "[B]",
                MenuIcon::Video => "\u{25b6}", // ▶
                MenuIcon::Plane => "\u{2708}", // ✈
            },
        }
    }

    /// Sidebar collapse indicator when the sidebar is open.
    pub fn chevron_left(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f053}", // nf-fa-chevron_left
            IconMode::Unicode => "\u{2039}",   // ‹
        }
    }

    /// Sidebar expand indicator when the sidebar is collapsed.
    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }
}

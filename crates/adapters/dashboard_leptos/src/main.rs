fn main() {
    leptos::mount::mount_to_body(shutterbook_dashboard::App);
}

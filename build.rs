use shadow_rs::ShadowBuilder;

// Build metadata for `hvacdesk --version`.
fn main() {
    ShadowBuilder::builder()
        .build()
        .expect("failed to generate build metadata");
}

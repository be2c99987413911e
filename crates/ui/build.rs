fn main() {
    slint_build::compile("ui/curio.slint").expect("Slint build failed");
}

mod test_templates;

mod alert_builder;

mod persisted;
